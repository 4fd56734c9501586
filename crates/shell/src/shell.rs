//! The application shell: owner of all client-side state.

use thiserror::Error;

use opsdesk_auth::Session;
use opsdesk_client::endpoints::session::LoginRequest;
use opsdesk_client::{ApiClient, ApiError, RequestAuth};
use chrono::NaiveDate;
use opsdesk_company::{gate, modules, GateState, ModuleDescriptor};
use opsdesk_core::ModuleId;
use opsdesk_state::{CompanyCache, PersistedStore, SessionStore, StateError};

use crate::config::AppConfig;
use crate::navigator::Navigator;
use crate::routes::Route;

/// Failure at the shell layer.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Process-wide context object.
///
/// One instance per running client; handlers and pages get passed
/// references instead of reaching for globals. Single logical thread: state
/// is only mutated between awaits, so no locks.
pub struct AppShell<N: Navigator> {
    pub config: AppConfig,
    pub client: ApiClient,
    pub sessions: SessionStore,
    pub companies: CompanyCache,
    pub persisted: PersistedStore,
    pub navigator: N,
}

impl<N: Navigator> AppShell<N> {
    /// One-call bootstrap for binaries: logging, env config, durable state.
    pub fn bootstrap(navigator: N) -> Result<Self, ShellError> {
        opsdesk_observability::init();
        let config = AppConfig::from_env();
        let persisted = PersistedStore::open_default()?;
        Ok(Self::new(config, persisted, navigator))
    }

    pub fn new(config: AppConfig, persisted: PersistedStore, navigator: N) -> Self {
        let mut client = ApiClient::new(config.api_base_url.as_str());

        // A credential that survived the last page load restores the
        // outbound auth immediately; the session itself is refetched by the
        // first navigation (or dies on the resulting 401).
        if let (Some(credential), Some(company_id)) =
            (persisted.credential(), persisted.company_id())
        {
            client.set_auth(RequestAuth::authenticated(credential, company_id));
        }

        Self {
            config,
            client,
            sessions: SessionStore::new(),
            companies: CompanyCache::new(),
            persisted,
            navigator,
        }
    }

    /// Log in and populate session, persisted, and outbound auth state.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ShellError> {
        let response = self
            .client
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let (session, token) = response.into_session();
        self.persisted
            .set_credentials(token.as_str(), session.company_id)?;
        self.client
            .set_auth(RequestAuth::authenticated(token, session.company_id));
        tracing::info!(user = %session.user_id, role = %session.role_name, "logged in");
        self.sessions.establish(session);
        Ok(())
    }

    /// Log out: best-effort server call, then clear everything locally.
    pub async fn logout(&mut self) {
        if let Err(e) = self.client.logout().await {
            tracing::warn!(error = %e, "logout endpoint failed; clearing local state anyway");
        }

        self.sessions.clear();
        self.companies.clear();
        self.client.clear_auth();
        if let Err(e) = self.persisted.clear() {
            tracing::warn!(error = %e, "failed to clear persisted state");
        }
        self.navigator.navigate(&Route::Login);
    }

    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    /// Company info for the current session's company, fetching on first
    /// use. Later responses overwrite earlier ones (last-response-wins).
    pub async fn ensure_company_info(&mut self) -> Result<(), ShellError> {
        let Some(company_id) = self.sessions.current().map(|s| s.company_id) else {
            return Ok(());
        };
        if self.companies.get(&company_id).is_some() {
            return Ok(());
        }
        let info = self.client.fetch_company(company_id).await?;
        self.companies.insert(info);
        Ok(())
    }

    /// Explicit refresh after an action that may have changed subscriptions.
    pub async fn refresh_company_info(&mut self) -> Result<(), ShellError> {
        let Some(company_id) = self.sessions.current().map(|s| s.company_id) else {
            return Ok(());
        };
        let info = self.client.fetch_company(company_id).await?;
        self.companies.insert(info);
        Ok(())
    }

    /// Module-gate state for a feature panel on the current company.
    ///
    /// Purely a view over the cache; callers wanting a fetch first use
    /// [`ensure_company_info`](Self::ensure_company_info).
    pub fn module_state(&self, required: &ModuleId) -> GateState {
        let company = self
            .sessions
            .current()
            .and_then(|s| self.companies.get(&s.company_id));
        gate(required, company)
    }

    /// Gate state for every sellable module, for the subscription-status
    /// page's overview list.
    pub fn module_overview(&self) -> Vec<(ModuleDescriptor, GateState)> {
        modules()
            .iter()
            .map(|descriptor| (*descriptor, self.module_state(&ModuleId::new(descriptor.id))))
            .collect()
    }

    /// Days the current company's subscription has been expired as of
    /// `today` (zero while still inside the window). `None` until company
    /// info is cached; the expiry 403 payload takes precedence when it
    /// carried a `days_expired` of its own.
    pub fn subscription_days_expired(&self, today: NaiveDate) -> Option<i64> {
        let session = self.sessions.current()?;
        let info = self.companies.get(&session.company_id)?;
        Some(info.subscription.days_expired(today))
    }
}
