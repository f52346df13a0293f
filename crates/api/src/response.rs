//! Shared response envelope types for API handlers.
//!
//! Every JSON endpoint responds with a `{ "success": ..., ... }` envelope.
//! Use [`DataResponse`] / [`MessageResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ... }` envelope for delete/seed/migrate
/// acknowledgements that carry no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
