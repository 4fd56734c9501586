//! Generic CRUD bindings for the administrative resources.
//!
//! Department, section, subsection, service, user, role, and
//! payment-transaction all follow the same list/get/create/update/delete
//! shape, so the path and draft type hang off a trait and the client gets
//! one generic implementation.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::endpoints::ApiMessage;
use crate::error::ApiResult;

/// An administrative resource with standard CRUD endpoints.
pub trait Resource: DeserializeOwned {
    /// Collection path, e.g. "/departments".
    const COLLECTION: &'static str;

    /// Payload for create/update.
    type Draft: Serialize;
}

impl ApiClient {
    pub async fn list_all<R: Resource>(&self) -> ApiResult<Vec<R>> {
        self.get(R::COLLECTION).await
    }

    pub async fn get_one<R: Resource>(&self, id: Uuid) -> ApiResult<R> {
        self.get(&format!("{}/{id}", R::COLLECTION)).await
    }

    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> ApiResult<ApiMessage> {
        self.post(R::COLLECTION, draft).await
    }

    pub async fn update<R: Resource>(&self, id: Uuid, draft: &R::Draft) -> ApiResult<ApiMessage> {
        self.put(&format!("{}/{id}", R::COLLECTION), draft).await
    }

    pub async fn delete_one<R: Resource>(&self, id: Uuid) -> ApiResult<ApiMessage> {
        self.delete(&format!("{}/{id}", R::COLLECTION)).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource Shapes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
}

impl Resource for Department {
    const COLLECTION: &'static str = "/departments";
    type Draft = DepartmentDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    pub department_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDraft {
    pub department_id: Uuid,
    pub name: String,
}

impl Resource for Section {
    const COLLECTION: &'static str = "/sections";
    type Draft = SectionDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub id: Uuid,
    pub section_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsectionDraft {
    pub section_id: Uuid,
    pub name: String,
}

impl Resource for Subsection {
    const COLLECTION: &'static str = "/subsections";
    type Draft = SubsectionDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: Uuid,
    pub subsection_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingDraft {
    pub subsection_id: Uuid,
    pub name: String,
}

impl Resource for ServiceOffering {
    const COLLECTION: &'static str = "/services";
    type Draft = ServiceOfferingDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role_name: String,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountDraft {
    pub full_name: String,
    pub email: String,
    pub role_name: String,
    pub department_id: Option<Uuid>,
}

impl Resource for UserAccount {
    const COLLECTION: &'static str = "/users";
    type Draft = UserAccountDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinitionDraft {
    pub name: String,
    pub permissions: Vec<String>,
}

impl Resource for RoleDefinition {
    const COLLECTION: &'static str = "/roles";
    type Draft = RoleDefinitionDraft;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: Uuid,
    pub amount_cents: i64,
    pub paid_on: NaiveDate,
    pub reference: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransactionDraft {
    pub amount_cents: i64,
    pub paid_on: NaiveDate,
    pub reference: String,
}

impl Resource for PaymentTransaction {
    const COLLECTION: &'static str = "/payment-transactions";
    type Draft = PaymentTransactionDraft;
}
