use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use opsdesk_core::{CompanyId, UserId};

use crate::{Permission, Role};

/// In-memory record of the authenticated user.
///
/// # Invariants
/// - `permissions` is the resolved set for `role_name` as of the last login
///   (or role refetch); the client never derives permissions locally.
/// - A single-user client holds at most one session at a time; establishing
///   a new one replaces the old wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub role_name: Role,
    pub permissions: HashSet<Permission>,
    pub company_id: CompanyId,
    pub company_name: String,
}

impl Session {
    /// Whether the session holds any of the given permissions.
    pub fn has_any_permission<'a>(
        &self,
        required: impl IntoIterator<Item = &'a Permission>,
    ) -> bool {
        required.into_iter().any(|p| self.permissions.contains(p))
    }
}
