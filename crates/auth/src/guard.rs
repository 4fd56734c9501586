//! Route admission decision.
//!
//! The guard is a pure function of the declared requirement and the current
//! session. It runs on every navigation and is never cached across routes:
//! permissions can change after a role edit without a full reload.

use serde::Serialize;

use crate::{RouteRequirement, Session};

/// Outcome of the admission check for one navigation.
///
/// "Forbidden but authenticated" and "not authenticated" are distinct
/// outcomes on purpose: the first renders an unauthorized page in place,
/// the second redirects to login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// No session: send the user to the login route.
    RedirectToLogin,
    /// Authenticated but not admitted: render the unauthorized page.
    Unauthorized,
    /// Admitted: render the wrapped page.
    Render,
}

/// Decide whether the current session may enter a route.
///
/// - No IO
/// - No panics
/// - Evaluated in a fixed order: session presence, then role membership,
///   then permission intersection.
pub fn admit(requirement: &RouteRequirement, session: Option<&Session>) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::RedirectToLogin;
    };

    if !requirement.allowed_roles.is_empty()
        && !requirement.allowed_roles.contains(&session.role_name)
    {
        tracing::debug!(
            role = %session.role_name,
            "route refused: role not in allowed set"
        );
        return RouteDecision::Unauthorized;
    }

    if !requirement.allowed_permissions.is_empty()
        && !session.has_any_permission(&requirement.allowed_permissions)
    {
        tracing::debug!(
            role = %session.role_name,
            "route refused: no overlapping permission"
        );
        return RouteDecision::Unauthorized;
    }

    RouteDecision::Render
}
