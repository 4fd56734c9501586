//! Static route table.
//!
//! Every page route declares its admission requirement here; the guard in
//! `opsdesk-auth` evaluates it on each navigation. Pre-auth routes (login
//! family, the expiry pages) carry no requirement.

use opsdesk_auth::{admit, RouteDecision, RouteRequirement, Session};
use opsdesk_core::RoutePath;

/// Path prefix of the login family ("/auth", "/auth/forgot-password", …).
pub const LOGIN_FAMILY: &str = "/auth";

/// Every page the shell can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Unauthorized,
    SubscriptionExpired,
    SubscriptionStatus,
    Issues,
    IssueCreate,
    Inventory,
    Users,
    Roles,
    Departments,
    Services,
    Payments,
    CompanySettings,
}

impl Route {
    pub fn path(&self) -> RoutePath {
        RoutePath::new(match self {
            Route::Login => "/auth",
            Route::Dashboard => "/dashboard",
            Route::Unauthorized => "/unauthorized",
            Route::SubscriptionExpired => "/subscription-expired",
            Route::SubscriptionStatus => "/users/subscription-status",
            Route::Issues => "/issues",
            Route::IssueCreate => "/issues/new",
            Route::Inventory => "/inventory",
            Route::Users => "/users",
            Route::Roles => "/roles",
            Route::Departments => "/departments",
            Route::Services => "/services",
            Route::Payments => "/payments",
            Route::CompanySettings => "/company",
        })
    }

    /// Admission requirement, or `None` for pre-auth routes.
    pub fn requirement(&self) -> Option<RouteRequirement> {
        match self {
            Route::Login | Route::Unauthorized | Route::SubscriptionExpired => None,
            Route::SubscriptionStatus | Route::Dashboard => {
                Some(RouteRequirement::authenticated())
            }
            Route::Issues => Some(RouteRequirement::permissions(["issue:view"])),
            Route::IssueCreate => Some(RouteRequirement::permissions(["issue:create"])),
            Route::Inventory => Some(RouteRequirement::permissions(["inventory:view"])),
            Route::Users => Some(RouteRequirement::permissions(["user:manage"])),
            Route::Roles => Some(
                RouteRequirement::permissions(["role:manage"]).with_roles(["ADMIN"]),
            ),
            Route::Departments => Some(RouteRequirement::permissions(["department:manage"])),
            Route::Services => Some(RouteRequirement::permissions(["service:manage"])),
            Route::Payments => Some(RouteRequirement::permissions(["payment:view"])),
            Route::CompanySettings => Some(
                RouteRequirement::permissions(["company:manage"]).with_roles(["ADMIN"]),
            ),
        }
    }

    /// Run the guard for this route against the current session.
    ///
    /// Pre-auth routes always render.
    pub fn decide(&self, session: Option<&Session>) -> RouteDecision {
        match self.requirement() {
            None => RouteDecision::Render,
            Some(requirement) => admit(&requirement, session),
        }
    }

    pub const ALL: &'static [Route] = &[
        Route::Login,
        Route::Dashboard,
        Route::Unauthorized,
        Route::SubscriptionExpired,
        Route::SubscriptionStatus,
        Route::Issues,
        Route::IssueCreate,
        Route::Inventory,
        Route::Users,
        Route::Roles,
        Route::Departments,
        Route::Services,
        Route::Payments,
        Route::CompanySettings,
    ];
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use opsdesk_auth::{Permission, Role};
    use opsdesk_core::{CompanyId, UserId};

    use super::*;

    fn session(role: &'static str, perms: &[&'static str]) -> Session {
        Session {
            user_id: UserId::new(),
            role_name: Role::new(role),
            permissions: perms.iter().map(|p| Permission::new(*p)).collect(),
            company_id: CompanyId::new(),
            company_name: "Acme Facilities".to_string(),
        }
    }

    #[test]
    fn declared_permissions_are_all_in_the_known_catalog() {
        // A typo in the route table would otherwise surface as a page
        // nobody can ever open.
        for route in Route::ALL {
            let Some(requirement) = route.requirement() else {
                continue;
            };
            for permission in &requirement.allowed_permissions {
                assert!(
                    permission.is_known(),
                    "route {route:?} declares unknown permission '{permission}'"
                );
            }
        }
    }

    #[test]
    fn route_paths_are_unique() {
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn pre_auth_routes_render_without_session() {
        assert_eq!(Route::Login.decide(None), RouteDecision::Render);
        assert_eq!(Route::SubscriptionExpired.decide(None), RouteDecision::Render);
    }

    #[test]
    fn authenticated_route_redirects_without_session() {
        assert_eq!(Route::Dashboard.decide(None), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn operator_cannot_open_role_management() {
        let s = session("OPERATOR", &["issue:create", "issue:view"]);
        assert_eq!(Route::Roles.decide(Some(&s)), RouteDecision::Unauthorized);
        assert_eq!(Route::Issues.decide(Some(&s)), RouteDecision::Render);
    }
}
