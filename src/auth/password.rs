use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Opaque credential-hashing capability. Stored hashes are only ever produced
/// and checked through this trait.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw: &str) -> String;
    fn verify(&self, raw: &str, hashed: &str) -> bool;
}

/// Salted SHA-256 hasher. Hashes are stored as `<salt>$<hex digest>`.
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    fn digest_hex(salt: &str, raw: &str) -> String {
        let digest = Sha256::digest(format!("{salt}{raw}").as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, raw: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest_hex(&salt, raw);
        format!("{salt}${digest}")
    }

    fn verify(&self, raw: &str, hashed: &str) -> bool {
        let Some((salt, digest)) = hashed.split_once('$') else {
            return false;
        };
        Self::digest_hex(salt, raw) == digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_against_original_password() {
        let hasher = Sha256PasswordHasher;
        let hashed = hasher.hash("secret");

        assert!(hasher.verify("secret", &hashed));
        assert!(!hasher.verify("not-the-secret", &hashed));
    }

    #[test]
    fn test_same_password_hashes_differently_per_salt() {
        let hasher = Sha256PasswordHasher;
        assert_ne!(hasher.hash("secret"), hasher.hash("secret"));
    }

    #[test]
    fn test_verify_rejects_malformed_stored_hash() {
        let hasher = Sha256PasswordHasher;
        assert!(!hasher.verify("secret", "no-salt-separator"));
    }
}
