//! Uniform response envelope returned by every book operation

use serde::{Deserialize, Serialize};

/// Success flag, human-readable message and optional payload.
///
/// `data` is only set on successful reads, creates and updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub is_success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful outcome that carries no payload (delete)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: None,
        }
    }
}
