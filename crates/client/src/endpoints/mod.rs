//! Typed bindings for the consumed REST endpoints.
//!
//! Shapes only: the backend's data model is its own concern. DTOs live at
//! this boundary and map to the client-domain types where one exists.

pub mod company;
pub mod issues;
pub mod resources;
pub mod session;

use serde::Deserialize;

/// Standard `{success, message}` acknowledgement for mutating endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}
