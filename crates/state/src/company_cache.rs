use std::collections::HashMap;

use opsdesk_company::CompanyInfo;
use opsdesk_core::CompanyId;

/// In-memory cache of company info, keyed by company id.
///
/// No TTL: entries stay until an explicit refresh overwrites them or a
/// subscription failure pushed by the backend invalidates them. Concurrent
/// fetches for the same company are allowed; whichever response completes
/// last wins.
#[derive(Debug, Default)]
pub struct CompanyCache {
    entries: HashMap<CompanyId, CompanyInfo>,
}

impl CompanyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, company_id: &CompanyId) -> Option<&CompanyInfo> {
        self.entries.get(company_id)
    }

    /// Store a fetched company info (last-response-wins).
    pub fn insert(&mut self, info: CompanyInfo) {
        self.entries.insert(info.company_id, info);
    }

    /// Drop a company's entry so the next read refetches.
    pub fn invalidate(&mut self, company_id: &CompanyId) {
        if self.entries.remove(company_id).is_some() {
            tracing::debug!(%company_id, "company info invalidated");
        }
    }

    /// Drop everything (logout).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
