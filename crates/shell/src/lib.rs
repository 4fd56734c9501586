//! `opsdesk-shell` — the top-level wiring of the client access layer.
//!
//! The shell owns every piece of mutable state (session store, company
//! cache, persisted store, API client) and the one dispatcher allowed to
//! perform navigation. Pages receive read access and classified results;
//! they never reach into global state or the router themselves.

pub mod config;
pub mod dispatcher;
pub mod navigator;
pub mod routes;
pub mod shell;

pub use config::AppConfig;
pub use dispatcher::DispatchOutcome;
pub use navigator::Navigator;
pub use routes::Route;
pub use shell::{AppShell, ShellError};
