use sha2::{Digest, Sha256};

/// Hex SHA-256 digest, the format stored in `ADMIN_PASSWORD_SHA256`.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare a candidate password against a stored digest without
/// short-circuiting on the first differing byte.
pub fn verify_password(password: &str, expected_digest: &str) -> bool {
    let actual = hash_password(password);
    let expected = expected_digest.trim().to_ascii_lowercase();

    if actual.len() != expected.len() {
        return false;
    }

    actual
        .bytes()
        .zip(expected.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn verify_accepts_uppercase_digest() {
        let digest = hash_password("s3cret").to_uppercase();
        assert!(verify_password("s3cret", &digest));
        assert!(!verify_password("wrong", &digest));
        assert!(!verify_password("s3cret", "short"));
    }
}
