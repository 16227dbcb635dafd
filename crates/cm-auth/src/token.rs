//! Session tokens
//!
//! Tokens are opaque random strings stored on the user row. The client
//! sends them back verbatim in the token header.

use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default token length in characters
pub const DEFAULT_TOKEN_LENGTH: usize = 64;

/// Generate a secure random token of `length` alphanumeric characters
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Extract the token from a header value.
///
/// The raw value is the token; a `Bearer ` prefix is tolerated.
/// Returns `None` for an empty value.
pub fn extract_token(header_value: &str) -> Option<&str> {
    let value = header_value.trim();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let token = generate_token(DEFAULT_TOKEN_LENGTH);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_token(DEFAULT_TOKEN_LENGTH));
    }

    #[test]
    fn test_extract_raw_token() {
        assert_eq!(extract_token("abc123"), Some("abc123"));
        assert_eq!(extract_token("  abc123 "), Some("abc123"));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_token("bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_extract_empty() {
        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("   "), None);
        assert_eq!(extract_token("Bearer "), None);
        assert_eq!(extract_token("Bearer"), None);
        assert_eq!(extract_token("bearer \t "), None);
    }

    #[test]
    fn test_extract_bearer_extra_whitespace() {
        assert_eq!(extract_token("Bearer   abc123"), Some("abc123"));
        assert_eq!(extract_token("BEARER\tabc123"), Some("abc123"));
        assert_eq!(extract_token("Bearerabc123"), Some("Bearerabc123"));
    }
}
