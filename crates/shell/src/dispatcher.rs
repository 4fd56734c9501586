//! The single top-level error dispatcher.
//!
//! Pages funnel every failed API call through [`AppShell::dispatch_failure`].
//! Session-fatal and subscription failures are handled here with state and
//! navigation side effects; everything else comes back as `Unhandled` with a
//! message for the page's own presentation. The HTTP layer stays free of UI
//! concerns, and no page carries bespoke expiry handling.

use opsdesk_client::{ApiError, FailureClass, SubscriptionExpiry};
use opsdesk_state::ExpiryRecord;

use crate::navigator::Navigator;
use crate::routes::{Route, LOGIN_FAMILY};
use crate::shell::AppShell;

/// What the dispatcher did with a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Globally handled: state cleared and/or navigation performed.
    Redirected,
    /// Not a global concern; the calling page presents the message.
    Unhandled { message: String },
}

impl<N: Navigator> AppShell<N> {
    /// Classify-and-react, one shot, no retries.
    pub fn dispatch_failure(&mut self, error: &ApiError) -> DispatchOutcome {
        match error {
            ApiError::Failure(FailureClass::Unauthorized) => self.on_unauthorized(),
            ApiError::Failure(FailureClass::SubscriptionExpired(expiry)) => {
                self.on_subscription_expired(expiry)
            }
            ApiError::Failure(FailureClass::ModuleNotSubscribed) => {
                self.navigator.navigate(&Route::SubscriptionStatus);
                DispatchOutcome::Redirected
            }
            ApiError::Failure(FailureClass::Domain { status, message }) => {
                tracing::debug!(status = *status, %message, "domain error returned to page");
                DispatchOutcome::Unhandled {
                    message: message.clone(),
                }
            }
            ApiError::Failure(FailureClass::Server { status, message }) => {
                tracing::error!(status = *status, %message, "server error");
                DispatchOutcome::Unhandled {
                    message: "Something went wrong. Please try again.".to_string(),
                }
            }
            ApiError::Transport(e) => {
                tracing::error!(error = %e, "transport failure");
                DispatchOutcome::Unhandled {
                    message: "Something went wrong. Please try again.".to_string(),
                }
            }
        }
    }

    /// 401 from any endpoint: session-fatal.
    ///
    /// Clears the in-memory session exactly once, but the durable credential
    /// and the outbound auth are dropped unconditionally: a 401 can arrive
    /// right after a page load restored the persisted token, before any
    /// session exists. A repeat 401 while already on a login-family route
    /// performs no further navigation.
    fn on_unauthorized(&mut self) -> DispatchOutcome {
        if self.sessions.clear() {
            self.companies.clear();
        }
        self.client.clear_auth();
        if let Err(e) = self.persisted.clear() {
            tracing::warn!(error = %e, "failed to clear persisted state on 401");
        }

        if !self.navigator.current_path().in_family(LOGIN_FAMILY) {
            self.navigator.navigate(&Route::Login);
        }
        DispatchOutcome::Redirected
    }

    /// 403 with an expiry code: persist what the payload carried, drop the
    /// session, land on the subscription-expired page.
    fn on_subscription_expired(&mut self, expiry: &SubscriptionExpiry) -> DispatchOutcome {
        let record = ExpiryRecord {
            company_name: expiry.company_name.clone(),
            subscription_end_date: expiry.subscription_end_date,
            days_expired: expiry.days_expired,
        };
        if let Err(e) = self.persisted.record_expiry(record) {
            tracing::warn!(error = %e, "failed to persist expiry snapshot");
        }

        if let Some(company_id) = self.sessions.current().map(|s| s.company_id) {
            self.companies.invalidate(&company_id);
        }
        self.sessions.clear();
        self.client.clear_auth();

        let expired_path = Route::SubscriptionExpired.path();
        if self.navigator.current_path() != expired_path {
            self.navigator.navigate(&Route::SubscriptionExpired);
        }
        DispatchOutcome::Redirected
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use opsdesk_auth::{Permission, Role, Session};
    use opsdesk_client::{ApiError, FailureClass, SubscriptionExpiry};
    use opsdesk_core::{CompanyId, RoutePath, UserId};
    use opsdesk_state::PersistedStore;

    use super::*;
    use crate::config::AppConfig;

    struct RecordingNavigator {
        current: RoutePath,
        visited: Vec<RoutePath>,
    }

    impl RecordingNavigator {
        fn at(path: &'static str) -> Self {
            Self {
                current: RoutePath::new(path),
                visited: Vec::new(),
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> RoutePath {
            self.current.clone()
        }

        fn navigate(&mut self, route: &Route) {
            self.current = route.path();
            self.visited.push(route.path());
        }
    }

    fn shell_at(path: &'static str) -> (AppShell<RecordingNavigator>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: "http://localhost:0".to_string(),
            realtime_url: "ws://localhost:0".to_string(),
        };
        let persisted = PersistedStore::open(dir.path().join("state.json")).unwrap();
        let shell = AppShell::new(config, persisted, RecordingNavigator::at(path));
        (shell, dir)
    }

    fn establish_session(shell: &mut AppShell<RecordingNavigator>) -> CompanyId {
        let company_id = CompanyId::new();
        shell
            .persisted
            .set_credentials("token-abc", company_id)
            .unwrap();
        shell.sessions.establish(Session {
            user_id: UserId::new(),
            role_name: Role::new("OPERATOR"),
            permissions: HashSet::from([Permission::new("issue:create")]),
            company_id,
            company_name: "Acme Facilities".to_string(),
        });
        company_id
    }

    fn unauthorized() -> ApiError {
        ApiError::Failure(FailureClass::Unauthorized)
    }

    #[test]
    fn first_401_clears_session_and_navigates_to_login() {
        let (mut shell, _dir) = shell_at("/issues");
        establish_session(&mut shell);

        let outcome = shell.dispatch_failure(&unauthorized());

        assert_eq!(outcome, DispatchOutcome::Redirected);
        assert!(shell.session().is_none());
        assert!(shell.persisted.credential().is_none());
        assert_eq!(shell.navigator.visited, vec![Route::Login.path()]);
    }

    #[test]
    fn a_401_with_restored_credentials_but_no_session_still_clears_them() {
        // Fresh page load: the persisted token was restored into the
        // outbound auth, but no session has been fetched yet.
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        {
            let mut persisted = PersistedStore::open(&state_path).unwrap();
            persisted
                .set_credentials("token-stale", CompanyId::new())
                .unwrap();
        }

        let config = AppConfig {
            api_base_url: "http://localhost:0".to_string(),
            realtime_url: "ws://localhost:0".to_string(),
        };
        let persisted = PersistedStore::open(&state_path).unwrap();
        let mut shell = AppShell::new(config, persisted, RecordingNavigator::at("/issues"));
        assert!(shell.client.auth().credential.is_some());

        shell.dispatch_failure(&unauthorized());

        assert!(shell.persisted.credential().is_none());
        assert!(shell.client.auth().credential.is_none());
        assert_eq!(shell.navigator.visited, vec![Route::Login.path()]);
    }

    #[test]
    fn repeated_401s_navigate_once() {
        let (mut shell, _dir) = shell_at("/issues");
        establish_session(&mut shell);

        shell.dispatch_failure(&unauthorized());
        shell.dispatch_failure(&unauthorized());
        shell.dispatch_failure(&unauthorized());

        assert_eq!(shell.navigator.visited.len(), 1);
    }

    #[test]
    fn a_401_while_on_the_login_route_performs_no_navigation() {
        let (mut shell, _dir) = shell_at("/auth");

        shell.dispatch_failure(&unauthorized());

        assert!(shell.navigator.visited.is_empty());
    }

    #[test]
    fn module_not_subscribed_redirects_and_keeps_session() {
        let (mut shell, _dir) = shell_at("/issues");
        establish_session(&mut shell);

        let outcome = shell.dispatch_failure(&ApiError::Failure(FailureClass::ModuleNotSubscribed));

        assert_eq!(outcome, DispatchOutcome::Redirected);
        assert!(shell.session().is_some());
        assert_eq!(
            shell.navigator.visited,
            vec![RoutePath::new("/users/subscription-status")]
        );
    }

    #[test]
    fn subscription_expired_persists_present_fields_and_clears_session() {
        let (mut shell, _dir) = shell_at("/payments");
        establish_session(&mut shell);

        let expiry = SubscriptionExpiry {
            company_name: Some("Acme Facilities".to_string()),
            subscription_end_date: NaiveDate::from_ymd_opt(2026, 3, 31),
            days_expired: None,
        };
        shell.dispatch_failure(&ApiError::Failure(FailureClass::SubscriptionExpired(
            expiry,
        )));

        assert!(shell.session().is_none());
        assert!(shell.persisted.credential().is_none());

        let record = shell.persisted.expiry().unwrap();
        assert_eq!(record.company_name.as_deref(), Some("Acme Facilities"));
        assert_eq!(
            record.subscription_end_date,
            NaiveDate::from_ymd_opt(2026, 3, 31)
        );
        assert!(record.days_expired.is_none());

        assert_eq!(
            shell.navigator.visited,
            vec![Route::SubscriptionExpired.path()]
        );
    }

    #[test]
    fn subscription_expired_is_idempotent_on_the_expired_page() {
        let (mut shell, _dir) = shell_at("/subscription-expired");

        shell.dispatch_failure(&ApiError::Failure(FailureClass::SubscriptionExpired(
            SubscriptionExpiry::default(),
        )));

        assert!(shell.navigator.visited.is_empty());
    }

    #[test]
    fn domain_errors_come_back_to_the_page_untouched() {
        let (mut shell, _dir) = shell_at("/departments");
        establish_session(&mut shell);

        let err = ApiError::Failure(FailureClass::Domain {
            status: 400,
            message: "name is required".to_string(),
        });
        let outcome = shell.dispatch_failure(&err);

        assert_eq!(
            outcome,
            DispatchOutcome::Unhandled {
                message: "name is required".to_string()
            }
        );
        assert!(shell.session().is_some());
        assert!(shell.navigator.visited.is_empty());
    }

    #[test]
    fn server_errors_surface_generically_without_redirect() {
        let (mut shell, _dir) = shell_at("/departments");
        establish_session(&mut shell);

        let err = ApiError::Failure(FailureClass::Server {
            status: 500,
            message: "boom".to_string(),
        });
        let DispatchOutcome::Unhandled { message } = shell.dispatch_failure(&err) else {
            panic!("expected unhandled outcome");
        };
        assert!(!message.contains("boom"));
        assert!(shell.navigator.visited.is_empty());
    }
}
