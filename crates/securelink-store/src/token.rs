//! Public resolution token generation.
//!
//! Tokens are the only thing standing between an unauthenticated caller
//! and a link, so they come from OS entropy rather than a seeded PRNG.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

/// Length of every generated token, in characters.
pub const TOKEN_LENGTH: usize = 16;

/// Raw entropy per token; 12 bytes encode to exactly 16 base64 characters.
const TOKEN_ENTROPY_BYTES: usize = 12;

/// Generates a fixed-length URL-safe token from a cryptographically
/// strong random source.
///
/// Uniqueness is not guaranteed here; the store collision-checks at
/// insert time and retries.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_has_fixed_length() {
        for _ in 0..100 {
            assert_eq!(generate().len(), TOKEN_LENGTH);
        }
    }

    #[test]
    fn test_token_is_url_safe() {
        for _ in 0..100 {
            let token = generate();
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in token {token}"
            );
        }
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..10_000).map(|_| generate()).collect();
        assert_eq!(tokens.len(), 10_000);
    }
}
