//! Random identity generation: game codes and player tokens.
//!
//! Neither function guarantees uniqueness on its own; the registry
//! retries against its live indexes. Both take the random source as a
//! parameter so tests can pass a seeded generator.

use rand::Rng;

use crate::{GameCode, PlayerToken};

/// Draws `length` independent decimal digits and concatenates them.
///
/// Leading zeros are as likely as any other digit, so codes are padded
/// by construction ("0042" is a valid 4-digit code).
pub(crate) fn random_code<R: Rng>(rng: &mut R, length: usize) -> GameCode {
    let digits = (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    GameCode(digits)
}

/// Draws 128 random bits and renders them as 32 lowercase hex chars.
pub(crate) fn random_token<R: Rng>(rng: &mut R) -> PlayerToken {
    let bytes: [u8; 16] = rng.random();
    PlayerToken(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_code_has_requested_length_and_only_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in 1..=9 {
            let code = random_code(&mut rng, length);
            assert_eq!(code.0.len(), length);
            assert!(code.0.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_random_token_is_32_hex_chars() {
        let mut rng = StdRng::seed_from_u64(2);
        let token = random_token(&mut rng);
        assert_eq!(token.0.len(), 32);
        assert!(token.0.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_same_seed_same_identities() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        assert_eq!(random_code(&mut a, 6), random_code(&mut b, 6));
        assert_eq!(random_token(&mut a), random_token(&mut b));
    }
}
