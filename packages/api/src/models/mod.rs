//! Data models shared across the server/client boundary.

mod user;

#[cfg(feature = "server")]
pub use user::{NewUser, User};
pub use user::{ApiResponse, RegisterRequest};

/// Route of the registration endpoint.
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Response messages returned by the registration endpoint.
pub mod messages {
    pub const CREATED: &str = "Account created successfully";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const ALREADY_EXISTS: &str = "User Already Exist";
    pub const INTERNAL: &str = "Something Went Wrong Please Retry Later !";
}
