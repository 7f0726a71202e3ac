use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Digest a password for storage in the credential document
///
/// Unsalted SHA-256, hex encoded (64 lowercase characters). This keeps
/// `users.json` compatible with documents written by earlier deployments.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against a stored digest
///
/// Constant-time in the digest contents; digests of a different length never match.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let candidate = hash_password(password);
    candidate.as_bytes().ct_eq(digest.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_known_value() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_hash_password_format() {
        let digest = hash_password("correct horse battery staple");

        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_password_deterministic() {
        assert_eq!(hash_password("abc"), hash_password("abc"));
        assert_ne!(hash_password("abc"), hash_password("abd"));
    }

    #[test]
    fn test_verify_password() {
        let digest = hash_password("s3cret");

        assert!(verify_password("s3cret", &digest));
        assert!(!verify_password("S3cret", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn test_verify_password_malformed_digest() {
        assert!(!verify_password("s3cret", "abc"));
        assert!(!verify_password("s3cret", ""));
        // Same length, one character off
        let mut digest = hash_password("s3cret");
        digest.replace_range(63.., if digest.ends_with('0') { "1" } else { "0" });
        assert!(!verify_password("s3cret", &digest));
    }
}
