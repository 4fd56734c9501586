//! Module gate.
//!
//! Guards a feature's content (not a whole route) behind the company's
//! subscribed-module list. The gate never fetches and never blocks: it is a
//! pure view over already-fetched [`CompanyInfo`]. When the fetch itself
//! failed, the owning page decides what to render instead of the gate.

use serde::Serialize;

use opsdesk_core::{ModuleId, RoutePath};

use crate::{info::CompanyInfo, registry::module_label};

/// Route the fallback panel links back to.
pub const SAFE_DEFAULT_ROUTE: &str = "/dashboard";

/// Content of the "not subscribed" fallback panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackPanel {
    pub module: ModuleId,
    /// Message naming the module by its display label.
    pub message: String,
    /// Link back to a safe default page.
    pub back_link: RoutePath,
}

/// Render state of a module-gated feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GateState {
    /// Company info has not been fetched yet.
    Loading,
    /// The company is not subscribed to the module; show the panel.
    NotSubscribed(FallbackPanel),
    /// Render the real content.
    Subscribed,
}

/// Decide the render state for a module-gated feature.
pub fn gate(required: &ModuleId, company: Option<&CompanyInfo>) -> GateState {
    let Some(company) = company else {
        return GateState::Loading;
    };

    if company.is_subscribed(required) {
        GateState::Subscribed
    } else {
        let label = module_label(required);
        tracing::debug!(module = %required, %label, "module not subscribed; showing fallback");
        GateState::NotSubscribed(FallbackPanel {
            module: required.clone(),
            message: format!("{label} is not part of your company's subscription."),
            back_link: RoutePath::new(SAFE_DEFAULT_ROUTE),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use opsdesk_core::CompanyId;

    use super::*;
    use crate::info::SubscriptionWindow;

    fn company(modules: &[&'static str]) -> CompanyInfo {
        CompanyInfo {
            company_id: CompanyId::new(),
            company_name: "Acme Facilities".to_string(),
            subscribed_modules: modules.iter().map(|m| ModuleId::new(*m)).collect(),
            subscription: SubscriptionWindow {
                start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            },
            is_active: true,
        }
    }

    #[test]
    fn loading_iff_company_info_absent() {
        let required = ModuleId::new("inventory");
        assert_eq!(gate(&required, None), GateState::Loading);
    }

    #[test]
    fn subscribed_module_renders_content() {
        let required = ModuleId::new("inventory");
        let info = company(&["inventory", "issueReporting"]);
        assert_eq!(gate(&required, Some(&info)), GateState::Subscribed);
    }

    #[test]
    fn missing_module_shows_fallback_naming_the_module() {
        // Company bought inventory only; the issue-reporting panel must show
        // the fallback and name the module "Issues".
        let required = ModuleId::new("issueReporting");
        let info = company(&["inventory"]);

        let GateState::NotSubscribed(panel) = gate(&required, Some(&info)) else {
            panic!("expected fallback panel");
        };
        assert!(panel.message.contains("Issues"));
        assert_eq!(panel.back_link.as_str(), SAFE_DEFAULT_ROUTE);
        assert_eq!(panel.module, required);
    }

    #[test]
    fn empty_subscription_set_blocks_everything() {
        let info = company(&[]);
        for id in ["inventory", "issueReporting", "payments"] {
            let state = gate(&ModuleId::new(id), Some(&info));
            assert!(matches!(state, GateState::NotSubscribed(_)));
        }
    }
}
