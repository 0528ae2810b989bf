//! Credential hashing
//!
//! One-way salted password hashing with bcrypt. The hasher owns no state
//! beyond its work factor.

use log::debug;

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Costs outside bcrypt's range are clamped into it.
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    /// Hashes a password with a fresh salt. Two calls with the same password
    /// produce different strings that both verify.
    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Checks a password against a stored hash. A malformed hash is a
    /// mismatch, not an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                debug!("Rejecting malformed password hash: {}", e);
                false
            }
        }
    }
}
