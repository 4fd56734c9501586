//! Durable client-side key-value state.
//!
//! A small JSON document in the platform data directory that outlives a
//! single page load: the bearer credential, the company id, and (only after
//! a subscription-expiry failure) the expiry snapshot shown on the
//! subscription-expired page. Writes go through a temp file + rename so a
//! crash mid-save never leaves a torn document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use opsdesk_core::CompanyId;

use crate::error::{StateError, StateResult};

/// Snapshot persisted when the backend reports the subscription expired.
///
/// Every field is optional: the error payload may carry any subset, and
/// only fields actually present are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryRecord {
    pub company_name: Option<String>,
    pub subscription_end_date: Option<NaiveDate>,
    pub days_expired: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedData {
    credential: Option<String>,
    company_id: Option<CompanyId>,
    expiry: Option<ExpiryRecord>,
}

/// File-backed store for the durable client state.
#[derive(Debug)]
pub struct PersistedStore {
    path: PathBuf,
    data: PersistedData,
}

impl PersistedStore {
    /// Open the store at the platform-default location.
    pub fn open_default() -> StateResult<Self> {
        let base = dirs::data_dir().ok_or(StateError::NoDataDir)?;
        Self::open(base.join("opsdesk").join("state.json"))
    }

    /// Open (or create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> StateResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "corrupt state file; starting fresh");
                PersistedData::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    pub fn credential(&self) -> Option<&str> {
        self.data.credential.as_deref()
    }

    pub fn company_id(&self) -> Option<CompanyId> {
        self.data.company_id
    }

    pub fn expiry(&self) -> Option<&ExpiryRecord> {
        self.data.expiry.as_ref()
    }

    /// Store the credential and company id produced by a login.
    pub fn set_credentials(
        &mut self,
        credential: impl Into<String>,
        company_id: CompanyId,
    ) -> StateResult<()> {
        self.data.credential = Some(credential.into());
        self.data.company_id = Some(company_id);
        self.data.expiry = None;
        self.save()
    }

    /// Record the subscription-expiry snapshot and drop the credential.
    ///
    /// The expired page reads this snapshot after the session is gone.
    pub fn record_expiry(&mut self, record: ExpiryRecord) -> StateResult<()> {
        self.data.credential = None;
        self.data.company_id = None;
        self.data.expiry = Some(record);
        self.save()
    }

    /// Wipe everything (logout or authentication failure).
    pub fn clear(&mut self) -> StateResult<()> {
        self.data = PersistedData::default();
        self.save()
    }

    fn save(&self) -> StateResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.data)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.as_os_str().to_owned();
    p.push(".tmp");
    PathBuf::from(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> PersistedStore {
        PersistedStore::open(dir.join("state.json")).unwrap()
    }

    #[test]
    fn credentials_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let company_id = CompanyId::new();

        {
            let mut store = store_in(dir.path());
            store.set_credentials("token-abc", company_id).unwrap();
        }

        let store = store_in(dir.path());
        assert_eq!(store.credential(), Some("token-abc"));
        assert_eq!(store.company_id(), Some(company_id));
        assert!(store.expiry().is_none());
    }

    #[test]
    fn clear_wipes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.set_credentials("token-abc", CompanyId::new()).unwrap();
        store
            .record_expiry(ExpiryRecord {
                company_name: Some("Acme".to_string()),
                ..Default::default()
            })
            .unwrap();

        store.clear().unwrap();

        let reopened = store_in(dir.path());
        assert!(reopened.credential().is_none());
        assert!(reopened.company_id().is_none());
        assert!(reopened.expiry().is_none());
    }

    #[test]
    fn expiry_drops_credential_and_keeps_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.set_credentials("token-abc", CompanyId::new()).unwrap();

        // Payload carried only the end date; name and days stay unset.
        store
            .record_expiry(ExpiryRecord {
                subscription_end_date: NaiveDate::from_ymd_opt(2026, 3, 31),
                ..Default::default()
            })
            .unwrap();

        assert!(store.credential().is_none());
        let expiry = store.expiry().unwrap();
        assert_eq!(
            expiry.subscription_end_date,
            NaiveDate::from_ymd_opt(2026, 3, 31)
        );
        assert!(expiry.company_name.is_none());
        assert!(expiry.days_expired.is_none());
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let store = PersistedStore::open(&path).unwrap();
        assert!(store.credential().is_none());
    }
}
