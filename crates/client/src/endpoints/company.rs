//! Company fetch and module-subscription update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use opsdesk_company::{CompanyInfo, SubscriptionWindow};
use opsdesk_core::{CompanyId, ModuleId};

use crate::client::ApiClient;
use crate::endpoints::ApiMessage;
use crate::error::ApiResult;

/// Wire shape of a company (flat, camelCase).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub company_id: CompanyId,
    pub company_name: String,
    pub subscribed_modules: Vec<ModuleId>,
    pub subscription_start_date: NaiveDate,
    pub subscription_end_date: NaiveDate,
    pub is_active: bool,
}

impl From<CompanyDto> for CompanyInfo {
    fn from(dto: CompanyDto) -> Self {
        CompanyInfo {
            company_id: dto.company_id,
            company_name: dto.company_name,
            subscribed_modules: dto.subscribed_modules.into_iter().collect(),
            subscription: SubscriptionWindow {
                start: dto.subscription_start_date,
                end: dto.subscription_end_date,
            },
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleUpdateRequest {
    pub modules: Vec<ModuleId>,
}

impl ApiClient {
    /// Fetch a company's subscription state.
    pub async fn fetch_company(&self, company_id: CompanyId) -> ApiResult<CompanyInfo> {
        let dto: CompanyDto = self.get(&format!("/companies/{company_id}")).await?;
        Ok(dto.into())
    }

    /// Replace a company's subscribed-module list.
    ///
    /// Callers must refresh the company cache afterwards; the client does
    /// not mutate state.
    pub async fn update_company_modules(
        &self,
        company_id: CompanyId,
        modules: Vec<ModuleId>,
    ) -> ApiResult<ApiMessage> {
        self.put(
            &format!("/companies/{company_id}/modules"),
            &ModuleUpdateRequest { modules },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_dto_maps_to_domain() {
        let raw = serde_json::json!({
            "companyId": "01890a5d-ac96-774b-bcce-b302099a8057",
            "companyName": "Acme Facilities",
            "subscribedModules": ["inventory", "issueReporting"],
            "subscriptionStartDate": "2026-01-01",
            "subscriptionEndDate": "2026-12-31",
            "isActive": true,
        });

        let dto: CompanyDto = serde_json::from_value(raw).unwrap();
        let info: CompanyInfo = dto.into();

        assert_eq!(info.company_name, "Acme Facilities");
        assert!(info.is_subscribed(&ModuleId::new("inventory")));
        assert_eq!(
            info.subscription.end,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }
}
