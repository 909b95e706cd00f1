//! String utilities for the domain layer.

/// Argument names whose values never appear in messages or logs.
pub const SECRET_ARGS: [&str; 4] = ["root_pass", "secret_key", "token", "password"];

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Whether an argument holds a secret value.
pub fn is_secret_arg(name: &str) -> bool {
    SECRET_ARGS.contains(&name)
}

/// Placeholder shown instead of a secret value.
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("ssh-ed25519", 20), "ssh-ed25519");
        assert_eq!(truncate("ssh-ed25519 AAAAC3Nza", 14), "ssh-ed25519...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "é" is two bytes; the cut must not split it
        assert_eq!(truncate("ééééé", 6), "é...");
        assert_eq!(truncate("ééééé", 10), "ééééé");
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate("abcdef", 2), "...");
    }

    #[test]
    fn test_secret_args() {
        assert!(is_secret_arg("root_pass"));
        assert!(!is_secret_arg("label"));
        assert_eq!(mask("hunter2hunter2"), "********");
        assert_eq!(mask(""), "");
    }
}
