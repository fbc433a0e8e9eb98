//! The `DEBUG` environment variable can force loggers on or off. It is read by the
//! caller and passed in as an explicit override, never consulted by the logger itself.

/// Variable consulted by [`debug_override`].
pub const DEBUG_ENV: &str = "DEBUG";

/// `"1"` forces loggers on, `"0"` forces them off, anything else leaves them alone.
#[must_use]
pub fn parse_debug_override(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

/// Reads `DEBUG` from the process environment.
#[must_use]
pub fn debug_override() -> Option<bool> {
    let value = std::env::var(DEBUG_ENV).ok();
    parse_debug_override(value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_values_override() {
        assert_eq!(parse_debug_override(Some("1")), Some(true));
        assert_eq!(parse_debug_override(Some("0")), Some(false));
        assert_eq!(parse_debug_override(Some("true")), None);
        assert_eq!(parse_debug_override(Some(" 1")), None);
        assert_eq!(parse_debug_override(None), None);
    }
}
