//! Primitive validators
//!
//! Each rule checks a single value against one provider-side constraint and
//! returns `Ok(())` or a [`ValidationError`] carrying an [`ErrorKind`] and a
//! message that names the offending value and the accepted set or range.
//! Rules are total, pure and never perform I/O, so the same input always
//! yields the same result.
//!
//! | Module | Rules |
//! |--------|-------|
//! | [`credentials`] | SSH public key, root password, access key label and permission |
//! | [`dns`] | record name, A/AAAA/hostname targets, domain, SOA email, TTL |
//! | [`storage`] | bucket label, bucket ACL, presigned method and expiry |
//! | [`resources`] | resource label, volume size, firewall policy, ids |

pub mod credentials;
pub mod dns;
pub mod error;
pub mod matching;
pub mod resources;
pub mod storage;

pub use error::{ErrorKind, ValidationError};
