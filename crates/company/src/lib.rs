//! `opsdesk-company` — company subscription model and module gating.
//!
//! Holds the company-info shape fetched from the backend, the registry of
//! sellable modules, and the module gate: a pure view that decides whether
//! a feature's UI renders, shows a fallback panel, or is still loading.

pub mod gate;
pub mod info;
pub mod registry;

pub use gate::{gate, FallbackPanel, GateState};
pub use info::{CompanyInfo, SubscriptionWindow};
pub use registry::{module_label, modules, ModuleDescriptor};
