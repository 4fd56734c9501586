//! `opsdesk-state` — client-side state with explicit lifecycles.
//!
//! Session and company-info state are process-wide but never ambient: each
//! store has a defined populate/clear lifecycle and is owned by the shell,
//! which passes references down. The persisted store is the only piece that
//! outlives a page load.

pub mod company_cache;
pub mod error;
pub mod persisted;
pub mod session_store;

pub use company_cache::CompanyCache;
pub use error::{StateError, StateResult};
pub use persisted::{ExpiryRecord, PersistedStore};
pub use session_store::SessionStore;
