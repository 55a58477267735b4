//! Plan identifier synthesis.
//!
//! A plan ID is the first two characters of the repository name followed by
//! five hex characters taken from 128 random bits. Uniqueness is
//! probabilistic: nothing checks a new ID against the IDs already on disk.

use rand::Rng;

/// Number of random hex characters appended to the repository prefix.
pub const SUFFIX_LEN: usize = 5;

/// Number of repository-name characters used as the ID prefix.
pub const PREFIX_LEN: usize = 2;

/// Generate a new plan ID for `repo` from the thread-local CSPRNG.
pub fn new_id(repo: &str) -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    new_id_from(repo, bytes)
}

/// Build a plan ID for `repo` from an explicit 128-bit random value.
///
/// Repositories shorter than [`PREFIX_LEN`] characters contribute their whole
/// name; the prefix is never padded.
pub fn new_id_from(repo: &str, random: [u8; 16]) -> String {
    let prefix: String = repo.chars().take(PREFIX_LEN).collect();
    let encoded = hex::encode(random);
    format!("{prefix}{}", &encoded[..SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_prefix_plus_first_five_hex_chars() {
        let random = [
            0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        assert_eq!(new_id_from("webapp", random), "weabcde");
    }

    #[test]
    fn short_repo_is_not_padded() {
        assert_eq!(new_id_from("x", [0u8; 16]), "x00000");
    }

    #[test]
    fn prefix_does_not_split_multibyte_chars() {
        let id = new_id_from("ñandú", [0xff; 16]);
        assert_eq!(id, "ñafffff");
    }

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = new_id("app");
        assert_eq!(id.len(), PREFIX_LEN + SUFFIX_LEN);
        assert!(id.starts_with("ap"));
        assert!(
            id[PREFIX_LEN..].chars().all(|c| c.is_ascii_hexdigit()),
            "expected hex suffix, got: {id}"
        );
    }

    #[test]
    fn generated_ids_are_random() {
        let ids: std::collections::HashSet<String> = (0..64).map(|_| new_id("app")).collect();
        // 64 draws from a 20-bit space; a handful of repeats would be a broken source.
        assert!(ids.len() > 60, "too many repeats: {}", ids.len());
    }
}
