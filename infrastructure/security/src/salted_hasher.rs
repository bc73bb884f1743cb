use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use sha2::{Digest, Sha256};

use business::domain::user::services::PasswordHasher;

const SALT_LEN: usize = 16;

/// Salted SHA-256 password hashing. Stored format is
/// `base64(salt)$base64(sha256(salt || password))`.
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
    fn digest(salt: &[u8], password: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl PasswordHasher for SaltedSha256Hasher {
    fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        let digest = Self::digest(&salt, password);
        format!("{}${}", STANDARD.encode(salt), STANDARD.encode(digest))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt_b64, digest_b64)) = stored.split_once('$') else {
            return false;
        };
        let Ok(salt) = STANDARD.decode(salt_b64) else {
            return false;
        };
        let Ok(expected) = STANDARD.decode(digest_b64) else {
            return false;
        };
        Self::digest(&salt, password) == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_matching_password() {
        let hasher = SaltedSha256Hasher;
        let stored = hasher.hash("secret1");
        assert!(hasher.verify("secret1", &stored));
    }

    #[test]
    fn should_reject_wrong_password() {
        let hasher = SaltedSha256Hasher;
        let stored = hasher.hash("secret1");
        assert!(!hasher.verify("secret2", &stored));
    }

    #[test]
    fn should_salt_each_hash_differently() {
        let hasher = SaltedSha256Hasher;
        assert_ne!(hasher.hash("secret1"), hasher.hash("secret1"));
    }

    #[test]
    fn should_reject_malformed_stored_value() {
        let hasher = SaltedSha256Hasher;
        assert!(!hasher.verify("secret1", "no-separator"));
        assert!(!hasher.verify("secret1", "!!!$???"));
    }
}
