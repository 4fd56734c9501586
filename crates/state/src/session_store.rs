use opsdesk_auth::Session;

/// Holder of the single in-memory session.
///
/// Populated on login, cleared on logout or on an authorization failure
/// pushed by the backend. Everything else reads it through [`current`].
///
/// [`current`]: SessionStore::current
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the session produced by a successful login.
    ///
    /// A single-user client holds one session at a time; any previous
    /// session is replaced wholesale.
    pub fn establish(&mut self, session: Session) {
        if self.current.is_some() {
            tracing::info!(user = %session.user_id, "replacing existing session");
        }
        self.current = Some(session);
    }

    /// Drop the session. Returns whether one was actually present, so
    /// callers can act exactly once on repeated clears.
    pub fn clear(&mut self) -> bool {
        let had = self.current.take().is_some();
        if had {
            tracing::info!("session cleared");
        }
        had
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
