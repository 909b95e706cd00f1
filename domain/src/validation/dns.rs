//! DNS rules: record names, record targets, domains and TTLs.
//!
//! The name grammar is a dot-separated sequence of labels, each label ASCII
//! alphanumeric with hyphens allowed only in the interior. `@` stands for the
//! zone apex wherever a record name or hostname target is accepted.
//!
//! A-record targets must be public IPv4 addresses: loopback (127.0.0.0/8) and
//! RFC-1918 ranges (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16) are rejected
//! even though they parse. AAAA targets carry no range restriction.

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ErrorKind, ValidationError};
use super::matching::{describe_allowed, one_of_fold};

pub const MAX_DNS_NAME_LEN: usize = 253;

/// Zone apex shorthand.
pub const APEX: &str = "@";

pub const DOMAIN_TYPES: [&str; 2] = ["master", "slave"];

/// TTL bounds in seconds. Zero means "use the zone default".
pub const TTL_MIN: i64 = 30;
pub const TTL_MAX: i64 = 604_800;

/// DNS record types accepted by record operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
    Srv,
    Caa,
}

impl RecordType {
    pub const ALL: [&'static str; 8] = ["A", "AAAA", "CNAME", "MX", "NS", "TXT", "SRV", "CAA"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
            RecordType::Srv => "SRV",
            RecordType::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::required("type"));
        }
        match one_of_fold(s, &Self::ALL) {
            Some("A") => Ok(RecordType::A),
            Some("AAAA") => Ok(RecordType::Aaaa),
            Some("CNAME") => Ok(RecordType::Cname),
            Some("MX") => Ok(RecordType::Mx),
            Some("NS") => Ok(RecordType::Ns),
            Some("TXT") => Ok(RecordType::Txt),
            Some("SRV") => Ok(RecordType::Srv),
            Some("CAA") => Ok(RecordType::Caa),
            _ => Err(ValidationError::new(
                ErrorKind::InvalidEnumValue,
                format!(
                    "got '{}': record type must be one of {}",
                    s,
                    describe_allowed(&Self::ALL)
                ),
            )),
        }
    }
}

fn is_dns_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Whether `name` matches the label grammar. Length is not checked.
pub fn is_dns_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_dns_label)
}

/// Validate a record name. Empty and `@` both address the zone apex.
pub fn validate_record_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_DNS_NAME_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "record name is {} characters long; it must be at most {} characters",
                name.len(),
                MAX_DNS_NAME_LEN
            ),
        ));
    }
    if name.is_empty() || name == APEX || is_dns_name(name) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidFormat,
        format!(
            "got '{}': record name must be '@' or dot-separated labels of letters, digits and interior hyphens",
            name
        ),
    ))
}

/// Validate an A-record target: a public IPv4 address.
pub fn validate_ipv4_target(target: &str) -> Result<(), ValidationError> {
    if target.is_empty() {
        return Err(ValidationError::required("target"));
    }
    let addr = Ipv4Addr::from_str(target).map_err(|_| {
        ValidationError::new(
            ErrorKind::InvalidAddress,
            format!("got '{}': A record target must be a valid IPv4 address", target),
        )
    })?;
    if addr.is_loopback() || addr.is_private() {
        return Err(ValidationError::new(
            ErrorKind::PrivateAddressRejected,
            format!(
                "got '{}': A record target must be a public address, not loopback (127.0.0.0/8) or private (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16)",
                target
            ),
        ));
    }
    Ok(())
}

/// Validate an AAAA-record target: an IPv6 address that is not an IPv4
/// address in disguise.
pub fn validate_ipv6_target(target: &str) -> Result<(), ValidationError> {
    if target.is_empty() {
        return Err(ValidationError::required("target"));
    }
    match IpAddr::from_str(target) {
        Ok(IpAddr::V6(addr)) if addr.to_ipv4_mapped().is_none() => Ok(()),
        Ok(_) => Err(ValidationError::new(
            ErrorKind::InvalidAddress,
            format!(
                "got '{}': AAAA record target must be an IPv6 address, not IPv4",
                target
            ),
        )),
        Err(_) => Err(ValidationError::new(
            ErrorKind::InvalidAddress,
            format!(
                "got '{}': AAAA record target must be a valid IPv6 address",
                target
            ),
        )),
    }
}

/// Validate a hostname target (CNAME, NS, MX).
pub fn validate_hostname_target(target: &str) -> Result<(), ValidationError> {
    if target == APEX || (target.len() <= MAX_DNS_NAME_LEN && is_dns_name(target)) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidFormat,
        format!(
            "got '{}': target must be '@' or a hostname of dot-separated labels",
            target
        ),
    ))
}

/// Validate a record target according to its type.
///
/// TXT, SRV and CAA targets are free-form and only need to be present.
pub fn validate_record_target(
    record_type: RecordType,
    target: &str,
) -> Result<(), ValidationError> {
    match record_type {
        RecordType::A => validate_ipv4_target(target),
        RecordType::Aaaa => validate_ipv6_target(target),
        RecordType::Cname | RecordType::Ns | RecordType::Mx => validate_hostname_target(target),
        RecordType::Txt | RecordType::Srv | RecordType::Caa => {
            if target.is_empty() {
                Err(ValidationError::required("target"))
            } else {
                Ok(())
            }
        }
    }
}

/// Validate a zone name such as `example.com`.
pub fn validate_domain_name(domain: &str) -> Result<(), ValidationError> {
    if domain.is_empty() {
        return Err(ValidationError::required("domain"));
    }
    if domain.len() > MAX_DNS_NAME_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "domain is {} characters long; it must be at most {} characters",
                domain.len(),
                MAX_DNS_NAME_LEN
            ),
        ));
    }
    if !is_dns_name(domain) || !domain.contains('.') {
        return Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            format!(
                "got '{}': domain must be a fully qualified name such as 'example.com'",
                domain
            ),
        ));
    }
    Ok(())
}

pub fn validate_domain_type(domain_type: &str) -> Result<(), ValidationError> {
    if DOMAIN_TYPES.contains(&domain_type) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidEnumValue,
        format!(
            "got '{}': domain type must be {}",
            domain_type,
            describe_allowed(&DOMAIN_TYPES)
        ),
    ))
}

/// Validate the SOA contact address of a master zone.
pub fn validate_soa_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::required("soa_email"));
    }
    let valid = match email.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && !host.contains('@')
                && validate_domain_name(host).is_ok()
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            format!(
                "got '{}': soa_email must be an address like 'admin@example.com'",
                email
            ),
        ));
    }
    Ok(())
}

/// Validate a record TTL: 0 (zone default) or 30 to 604800 seconds.
pub fn validate_ttl(ttl: i64) -> Result<(), ValidationError> {
    if ttl == 0 || (TTL_MIN..=TTL_MAX).contains(&ttl) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::OutOfRange,
        format!(
            "got {}: ttl_sec must be 0 or between {} and {} seconds",
            ttl, TTL_MIN, TTL_MAX
        ),
    ))
}
