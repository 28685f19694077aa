//! # Password hashing — Argon2id
//!
//! [`PasswordHashing::hash`] generates a random salt via [`OsRng`], hashes the plaintext
//! with Argon2id at the configured cost and returns a PHC-format string
//! (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). The string embeds its own parameters, so
//! a later verifier does not need to know the cost that was in effect at sign-up.
//!
//! Hashing is deliberately slow. Request handlers go through
//! [`PasswordHashing::hash_blocking`], which moves the work onto Tokio's blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::Deserialize;

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Salted one-way password transform.
#[derive(Debug, Clone)]
pub struct PasswordHashing {
    params: Params,
}

impl PasswordHashing {
    pub fn new(cost: PasswordCost) -> Result<Self, String> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| format!("Invalid password hashing cost: {}", e))?;
        Ok(Self { params })
    }

    /// Hash a password. Returns a PHC-format string.
    pub fn hash(&self, password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| format!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// [`hash`](Self::hash) on the blocking thread pool.
    pub async fn hash_blocking(&self, password: String) -> Result<String, String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| format!("Password hashing task failed: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn cheap() -> PasswordHashing {
        PasswordHashing::new(PasswordCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = cheap().hash("longenough1").unwrap();
        assert_ne!(hash, "longenough1");
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"longenough1", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong-password", &parsed)
            .is_err());
    }

    #[test]
    fn test_each_hash_gets_its_own_salt() {
        let hasher = cheap();
        let a = hasher.hash("same password").unwrap();
        let b = hasher.hash("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cost_is_embedded_in_hash() {
        let hash = cheap().hash("longenough1").unwrap();
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let result = PasswordHashing::new(PasswordCost {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_hash_blocking() {
        let hash = cheap().hash_blocking("longenough1".to_string()).await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
