//! `opsdesk-core` — shared client-domain building blocks.
//!
//! This crate contains **pure** primitives (identifiers, module names,
//! route paths, errors) with no transport or storage concerns.

pub mod error;
pub mod id;
pub mod module;
pub mod route;

pub use error::CoreError;
pub use id::{CompanyId, UserId};
pub use module::ModuleId;
pub use route::RoutePath;
