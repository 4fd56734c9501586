use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use opsdesk_core::{CompanyId, ModuleId};

/// Subscription validity window for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SubscriptionWindow {
    /// Days the subscription has been expired as of `today` (zero if still
    /// inside the window).
    pub fn days_expired(&self, today: NaiveDate) -> i64 {
        (today - self.end).num_days().max(0)
    }
}

/// Current company's subscription state as last fetched from the backend.
///
/// Treated as a cache with no TTL: staleness is tolerated until an explicit
/// refresh or until the backend pushes a subscription 403 that forces
/// invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_id: CompanyId,
    pub company_name: String,
    pub subscribed_modules: HashSet<ModuleId>,
    pub subscription: SubscriptionWindow,
    pub is_active: bool,
}

impl CompanyInfo {
    pub fn is_subscribed(&self, module: &ModuleId) -> bool {
        self.subscribed_modules.contains(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_expired_is_zero_inside_window() {
        let window = SubscriptionWindow {
            start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        };
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(window.days_expired(today), 0);
    }

    #[test]
    fn days_expired_counts_past_end() {
        let window = SubscriptionWindow {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        };
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        assert_eq!(window.days_expired(today), 10);
    }
}
