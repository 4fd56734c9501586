use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role name as reported by the backend (e.g. "ADMIN", "OPERATOR").
///
/// Roles are opaque strings at this layer; route requirements check
/// membership by exact name. The backend owns the role-to-permission
/// mapping and ships the resolved permission set inside the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
