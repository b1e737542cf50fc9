//! Slug and link id generation, and slug format validation.

use crate::domain::errors::SlugError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Symbols used for generated slugs and ids.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated slugs.
pub const SLUG_LENGTH: usize = 6;

/// Minimum length of a user-chosen slug.
pub const MIN_SLUG_LENGTH: usize = 4;

/// Length of generated link ids.
pub const LINK_ID_LENGTH: usize = 20;

/// First path segments served by fixed routes. A link under one of these
/// slugs could never be reached through `GET /{slug}`.
pub const RESERVED_SLUGS: &[&str] = &["health", "link", "slug", "url"];

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());

/// Returns `length` symbols drawn uniformly from `[a-z0-9]`.
pub fn random_token(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates a candidate slug.
///
/// Collisions are possible; uniqueness is checked by the caller.
pub fn generate_slug() -> String {
    random_token(SLUG_LENGTH)
}

/// Generates an opaque link id.
pub fn generate_link_id() -> String {
    random_token(LINK_ID_LENGTH)
}

/// Returns `true` if `slug` collides with a fixed route.
pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

/// Checks slug length and characters, in that order.
///
/// # Errors
///
/// - [`SlugError::TooShort`] for fewer than 4 characters, whatever they are
/// - [`SlugError::InvalidCharacters`] for anything outside `[a-z0-9]`
pub fn validate_slug_format(slug: &str) -> Result<(), SlugError> {
    if slug.chars().count() < MIN_SLUG_LENGTH {
        return Err(SlugError::TooShort);
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(SlugError::InvalidCharacters);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_correct_length() {
        assert_eq!(generate_slug().len(), SLUG_LENGTH);
    }

    #[test]
    fn test_generate_slug_uses_alphabet() {
        for _ in 0..200 {
            let slug = generate_slug();
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            );
        }
    }

    #[test]
    fn test_generated_slugs_pass_format_check() {
        for _ in 0..200 {
            assert!(validate_slug_format(&generate_slug()).is_ok());
        }
    }

    #[test]
    fn test_generate_slug_covers_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_slug().into_bytes())
            .map(char::from)
            .collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_link_id() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_link_id()).collect();

        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.len() == LINK_ID_LENGTH));
    }

    #[test]
    fn test_validate_valid_slugs() {
        assert!(validate_slug_format("google").is_ok());
        assert!(validate_slug_format("abcd").is_ok());
        assert!(validate_slug_format("1234").is_ok());
        assert!(validate_slug_format("a1b2c3d4e5").is_ok());
    }

    #[test]
    fn test_validate_too_short_regardless_of_characters() {
        for slug in ["", "a", "foo", "A-_", "!!!", "é"] {
            assert_eq!(validate_slug_format(slug), Err(SlugError::TooShort), "{slug:?}");
        }
    }

    #[test]
    fn test_validate_invalid_characters() {
        for slug in ["wu-tang", "Google", "my_slug", "with space", "slüg", "abc/"] {
            assert_eq!(
                validate_slug_format(slug),
                Err(SlugError::InvalidCharacters),
                "{slug:?}"
            );
        }
    }

    #[test]
    fn test_reserved_slugs() {
        for slug in RESERVED_SLUGS {
            assert!(is_reserved_slug(slug), "{slug:?}");
        }
        assert!(!is_reserved_slug("google"));
        assert!(!is_reserved_slug("links"));
    }

    #[test]
    fn test_validate_length_counts_characters_not_bytes() {
        // three characters, six bytes
        assert_eq!(validate_slug_format("äöü"), Err(SlugError::TooShort));
    }
}
