//! Case-folded string comparison shared by enum checks and list filters.

/// Fold a string for case-insensitive comparison.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality. Folded lengths must match exactly.
pub fn eq_fold(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Case-insensitive substring test.
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Return the allowed value matching `value` case-insensitively.
pub fn one_of_fold<'a>(value: &str, allowed: &[&'a str]) -> Option<&'a str> {
    allowed.iter().copied().find(|candidate| eq_fold(value, candidate))
}

/// Render an allowed set for error messages: `'a', 'b' or 'c'`.
pub fn describe_allowed(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|v| format!("'{}'", v)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}
