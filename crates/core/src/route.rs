//! Route path value type.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A client-side route path (e.g. "/users/subscription-status").
///
/// Paths are compared verbatim; family membership (e.g. "is this a
/// login-family route?") uses prefix matching so that "/auth",
/// "/auth/forgot-password" and friends all count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this path belongs to the family rooted at `prefix`.
    ///
    /// "/auth" is in the "/auth" family, as is "/auth/reset"; "/authority"
    /// is not.
    pub fn in_family(&self, prefix: &str) -> bool {
        let path = self.as_str();
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RoutePath {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
