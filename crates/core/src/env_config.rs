//! Environment variable parsing that surfaces bad values instead of
//! swallowing them.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable returns `default` silently. A set-but-unparseable value
/// logs a warning with the offending value before falling back.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "unparseable env var, falling back to default");
                default
            },
        },
        Err(_) => default,
    }
}
