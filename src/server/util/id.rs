//! Identifier, team code and access token generation.

use rand::Rng;
use uuid::Uuid;

/// Number of digits in a team code.
pub const TEAM_CODE_LENGTH: usize = 8;

/// Length of generated access tokens.
const TOKEN_LENGTH: usize = 48;

/// Creates a record id of the form `<kind>_<32 hex chars>`, e.g. `team_3f2a…`.
pub fn new_id(kind: &str) -> String {
    format!("{}_{}", kind, Uuid::new_v4().simple())
}

/// Generates a random 8-digit team code in `10000000..=99999999`.
///
/// Uniqueness against existing teams is checked by the caller.
pub fn generate_team_code() -> String {
    rand::rng().random_range(10_000_000..=99_999_999u32).to_string()
}

/// Checks that `code` is exactly eight ASCII digits.
pub fn is_team_code(code: &str) -> bool {
    code.len() == TEAM_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Generates an opaque access token.
///
/// Uses uppercase letters, lowercase letters and digits drawn from the thread-local
/// random number generator.
pub fn generate_access_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_codes_are_eight_digits() {
        for _ in 0..1000 {
            let code = generate_team_code();
            assert!(is_team_code(&code), "bad code {}", code);
            assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_team_code("1234567"));
        assert!(!is_team_code("123456789"));
        assert!(!is_team_code("1234a678"));
        assert!(!is_team_code(""));
        assert!(is_team_code("00000000"));
    }

    #[test]
    fn ids_carry_kind_prefix() {
        let id = new_id("team");
        assert!(id.starts_with("team_"));
        assert_eq!(id.len(), "team_".len() + 32);
        assert_ne!(id, new_id("team"));
    }

    #[test]
    fn access_tokens_are_alphanumeric() {
        let token = generate_access_token();
        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
