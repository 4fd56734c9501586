//! Error classification for the inbound interceptor.
//!
//! The backend signals authorization and subscription failures with
//! well-known codes on 401/403 responses. Classification is a pure function
//! of status + body so it can be tested without a socket; the dispatcher in
//! the shell turns the classified result into navigation.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend error codes recognized on 403 responses.
const EXPIRY_CODES: &[&str] = &[
    "SUBSCRIPTION_EXPIRED",
    "COMPANY_INACTIVE",
    "SUBSCRIPTION_NOT_CONFIGURED",
];
const MODULE_CODE: &str = "MODULE_NOT_SUBSCRIBED";

/// Expiry details carried on a subscription-failure payload.
///
/// Every field is optional; the dispatcher persists only what is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionExpiry {
    pub company_name: Option<String>,
    pub subscription_end_date: Option<NaiveDate>,
    pub days_expired: Option<i64>,
}

/// Classified error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureClass {
    /// 401 from any endpoint: session-fatal.
    #[error("authentication failed")]
    Unauthorized,

    /// 403 with a subscription-expiry code.
    #[error("company subscription expired or inactive")]
    SubscriptionExpired(SubscriptionExpiry),

    /// 403 with the module-not-subscribed code (session survives).
    #[error("module not part of the company subscription")]
    ModuleNotSubscribed,

    /// Any other 4xx carrying a message: recovered locally by the page.
    #[error("request rejected ({status}): {message}")]
    Domain { status: u16, message: String },

    /// 5xx or unclassifiable response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Error surfaced to callers of the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, decode). Treated like a
    /// server error by the caller: logged and surfaced generically.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] FailureClass),
}

impl ApiError {
    /// The classified failure, if this is one.
    pub fn failure(&self) -> Option<&FailureClass> {
        match self {
            ApiError::Failure(f) => Some(f),
            ApiError::Transport(_) => None,
        }
    }
}

/// Classify an error response from its status and (possibly null) JSON body.
pub fn classify(status: u16, body: &Value) -> FailureClass {
    if status == 401 {
        return FailureClass::Unauthorized;
    }

    let code = body.get("code").and_then(Value::as_str);

    if status == 403 {
        match code {
            Some(c) if EXPIRY_CODES.contains(&c) => {
                return FailureClass::SubscriptionExpired(expiry_from_body(body));
            }
            Some(MODULE_CODE) => return FailureClass::ModuleNotSubscribed,
            _ => {}
        }
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("request failed")
        .to_string();

    if (400..500).contains(&status) {
        FailureClass::Domain { status, message }
    } else {
        FailureClass::Server { status, message }
    }
}

fn expiry_from_body(body: &Value) -> SubscriptionExpiry {
    SubscriptionExpiry {
        company_name: body
            .get("companyName")
            .and_then(Value::as_str)
            .map(str::to_string),
        subscription_end_date: body
            .get("subscriptionEndDate")
            .and_then(Value::as_str)
            .and_then(|s| match s.parse() {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::debug!(raw = s, error = %e, "unparseable subscriptionEndDate dropped");
                    None
                }
            }),
        days_expired: body.get("daysExpired").and_then(Value::as_i64),
    }
}
