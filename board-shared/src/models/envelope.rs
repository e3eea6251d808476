use serde::{Deserialize, Serialize};

/// Envelope wrapping every backend reply.
///
/// Commands without a payload (delete, signup) reply with `data` absent or
/// `null`, so `data` is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful.
    pub success: bool,

    /// Machine-readable result code.
    #[serde(default)]
    pub code: String,

    /// Human-readable message, suitable for display.
    #[serde(default)]
    pub message: String,

    /// Payload, when the call produces one. A missing field reads as `None`.
    pub data: Option<T>,
}
