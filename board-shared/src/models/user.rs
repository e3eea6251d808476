use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the authenticated identity as returned by `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// The user's email address.
    pub email: String,

    /// Bearer token issued by the backend. Opaque to the client.
    pub token: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

impl LoginRequest {
    /// Build a request from borrowed credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
