//! `opsdesk-auth` — pure authorization boundary for the client shell.
//!
//! This crate is intentionally decoupled from HTTP and storage: it holds the
//! session model, route requirements, and the admission decision, all as
//! plain data and pure functions.

pub mod guard;
pub mod permissions;
pub mod requirement;
pub mod roles;
pub mod session;

pub use guard::{admit, RouteDecision};
pub use permissions::{KnownPermission, Permission};
pub use requirement::RouteRequirement;
pub use roles::Role;
pub use session::Session;
