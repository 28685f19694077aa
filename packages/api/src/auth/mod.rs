//! Credential checks and password hashing.

mod guard;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
mod password;

pub use guard::{
    guard_registration, CredentialState, GuardDecision, HOME_PATH, REGISTER_PAGE_PATH, TOKEN_COOKIE,
};
#[cfg(feature = "server")]
pub use middleware::anonymous_only;
#[cfg(feature = "server")]
pub use password::{PasswordCost, PasswordHashing};
