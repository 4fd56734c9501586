//! Module identifiers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Identifier of a sellable feature module (e.g. "issueReporting").
///
/// Module ids are opaque strings at this layer; mapping ids to display
/// labels lives in the company crate's registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(Cow<'static, str>);

impl ModuleId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ModuleId {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
