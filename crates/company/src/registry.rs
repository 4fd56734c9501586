//! Registry of sellable modules.
//!
//! The backend identifies modules by id; the fallback panel needs a human
//! label ("issueReporting" → "Issues"). Unknown ids fall back to the raw id
//! so a newly sold module degrades gracefully instead of erroring.

use opsdesk_core::ModuleId;

/// One sellable module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

const MODULES: &[ModuleDescriptor] = &[
    ModuleDescriptor { id: "issueReporting", label: "Issues" },
    ModuleDescriptor { id: "inventory", label: "Inventory" },
    ModuleDescriptor { id: "userManagement", label: "Users & Roles" },
    ModuleDescriptor { id: "departments", label: "Departments" },
    ModuleDescriptor { id: "services", label: "Services" },
    ModuleDescriptor { id: "payments", label: "Payments" },
];

/// All modules the client knows how to gate.
pub fn modules() -> &'static [ModuleDescriptor] {
    MODULES
}

/// Display label for a module id (raw id if unknown).
pub fn module_label(module: &ModuleId) -> &str {
    MODULES
        .iter()
        .find(|m| m.id == module.as_str())
        .map(|m| m.label)
        .unwrap_or_else(|| module.as_str())
}
