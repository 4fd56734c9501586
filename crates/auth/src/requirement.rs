use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Declared admission requirement for a route.
///
/// Static configuration, not runtime state: every page route in the shell's
/// route table carries one of these. Both sets empty means the route is
/// public to any authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequirement {
    pub allowed_roles: HashSet<Role>,
    pub allowed_permissions: HashSet<Permission>,
}

impl RouteRequirement {
    /// Any authenticated session is admitted.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Admit sessions whose role is one of `roles`.
    pub fn roles<R: Into<Role>>(roles: impl IntoIterator<Item = R>) -> Self {
        Self {
            allowed_roles: roles.into_iter().map(Into::into).collect(),
            allowed_permissions: HashSet::new(),
        }
    }

    /// Admit sessions holding any of `permissions`.
    pub fn permissions<P: Into<Permission>>(permissions: impl IntoIterator<Item = P>) -> Self {
        Self {
            allowed_roles: HashSet::new(),
            allowed_permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Restrict by role and permission together (both must pass).
    pub fn with_roles<R: Into<Role>>(mut self, roles: impl IntoIterator<Item = R>) -> Self {
        self.allowed_roles = roles.into_iter().map(Into::into).collect();
        self
    }
}
