use crate::error::AppError;
use bcrypt::{hash, verify};

/// One-way password hashing with bcrypt.
///
/// Constructed once and injected into the auth service, so the cost factor
/// is fixed at wiring time (tests use a lower cost to stay fast).
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash(password, self.cost).map_err(AppError::from)
    }

    pub fn verify(&self, password: &str, hashed_password: &str) -> Result<bool, AppError> {
        verify(password, hashed_password).map_err(AppError::from)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: 12 } // bcrypt default cost
    }
}
