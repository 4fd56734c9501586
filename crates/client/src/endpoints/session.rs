//! Login and logout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use opsdesk_auth::{Permission, Role, Session};
use opsdesk_core::{CompanyId, UserId};

use crate::client::ApiClient;
use crate::endpoints::ApiMessage;
use crate::error::ApiResult;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: session fields plus the bearer credential.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: UserId,
    pub role_name: String,
    pub permissions: Vec<String>,
    pub company_id: CompanyId,
    pub company_name: String,
}

impl LoginResponse {
    pub fn into_session(self) -> (Session, String) {
        let permissions: HashSet<Permission> =
            self.permissions.into_iter().map(Permission::new).collect();
        let session = Session {
            user_id: self.user_id,
            role_name: Role::new(self.role_name),
            permissions,
            company_id: self.company_id,
            company_name: self.company_name,
        };
        (session, self.token)
    }
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post("/auth/login", request).await
    }

    pub async fn logout(&self) -> ApiResult<ApiMessage> {
        self.post_empty("/auth/logout").await
    }
}
