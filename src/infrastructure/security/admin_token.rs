// src/infrastructure/security/admin_token.rs
use crate::application::ports::security::AdminTokenValidator;
use sha2::{Digest, Sha256};

/// Holds only the SHA-256 digest of the configured admin token; presented
/// tokens are digested before comparison.
pub struct Sha256TokenValidator {
    digest: [u8; 32],
}

impl Sha256TokenValidator {
    pub fn new(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }
}

impl AdminTokenValidator for Sha256TokenValidator {
    fn verify(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        presented == self.digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_token_only() {
        let validator = Sha256TokenValidator::new("correct-horse-battery-staple");
        assert!(validator.verify("correct-horse-battery-staple"));
        assert!(!validator.verify("correct-horse-battery"));
        assert!(!validator.verify(""));
    }
}
