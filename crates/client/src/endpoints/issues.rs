//! Issue listing, creation, and progress transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::endpoints::ApiMessage;
use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub reported_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    /// Service the issue is reported against, when applicable.
    pub service_id: Option<Uuid>,
}

impl ApiClient {
    pub async fn list_issues(&self) -> ApiResult<Vec<Issue>> {
        self.get("/issues").await
    }

    pub async fn create_issue(&self, issue: &NewIssue) -> ApiResult<Issue> {
        self.post("/issues", issue).await
    }

    pub async fn start_issue_progress(&self, id: Uuid) -> ApiResult<ApiMessage> {
        self.post_empty(&format!("/issues/{id}/start-progress")).await
    }

    pub async fn complete_issue_progress(&self, id: Uuid) -> ApiResult<ApiMessage> {
        self.post_empty(&format!("/issues/{id}/complete-progress"))
            .await
    }
}
