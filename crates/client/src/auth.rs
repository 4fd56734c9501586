use opsdesk_core::CompanyId;

/// Outbound interceptor state: what gets attached to every request.
///
/// The shell updates this on login/logout; the client only reads it. The
/// company id rides on its own header because the multi-tenant backend
/// filters every query by tenant.
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    pub credential: Option<String>,
    pub company_id: Option<CompanyId>,
}

impl RequestAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(credential: impl Into<String>, company_id: CompanyId) -> Self {
        Self {
            credential: Some(credential.into()),
            company_id: Some(company_id),
        }
    }
}
