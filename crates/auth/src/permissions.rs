use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission capability token (e.g. "issue:create").
///
/// Permissions stay free-form strings at the boundary (the backend mints
/// them), but [`KnownPermission`] gives a closed catalog to check against so
/// typos in client-side route tables surface in tests rather than as pages
/// that nobody can open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this permission is in the closed known catalog.
    pub fn is_known(&self) -> bool {
        KnownPermission::from_str(self.as_str()).is_ok()
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<KnownPermission> for Permission {
    fn from(value: KnownPermission) -> Self {
        Self::new(value.as_str())
    }
}

/// Closed catalog of permissions the client declares in route requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownPermission {
    IssueView,
    IssueCreate,
    IssueAssign,
    IssueProgress,
    InventoryView,
    InventoryManage,
    UserManage,
    RoleManage,
    DepartmentManage,
    ServiceManage,
    PaymentView,
    CompanyManage,
}

impl KnownPermission {
    pub const ALL: &'static [KnownPermission] = &[
        KnownPermission::IssueView,
        KnownPermission::IssueCreate,
        KnownPermission::IssueAssign,
        KnownPermission::IssueProgress,
        KnownPermission::InventoryView,
        KnownPermission::InventoryManage,
        KnownPermission::UserManage,
        KnownPermission::RoleManage,
        KnownPermission::DepartmentManage,
        KnownPermission::ServiceManage,
        KnownPermission::PaymentView,
        KnownPermission::CompanyManage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KnownPermission::IssueView => "issue:view",
            KnownPermission::IssueCreate => "issue:create",
            KnownPermission::IssueAssign => "issue:assign",
            KnownPermission::IssueProgress => "issue:progress",
            KnownPermission::InventoryView => "inventory:view",
            KnownPermission::InventoryManage => "inventory:manage",
            KnownPermission::UserManage => "user:manage",
            KnownPermission::RoleManage => "role:manage",
            KnownPermission::DepartmentManage => "department:manage",
            KnownPermission::ServiceManage => "service:manage",
            KnownPermission::PaymentView => "payment:view",
            KnownPermission::CompanyManage => "company:manage",
        }
    }
}

impl FromStr for KnownPermission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnownPermission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// Error returned when a permission string is not in the closed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission '{0}'")]
pub struct UnknownPermission(pub String);
