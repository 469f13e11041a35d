use std::io::ErrorKind;
use std::path::PathBuf;

use common::{BeforeAfterEnergyUsage, Home};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace};
use uuid::Uuid;

/// Errors raised by the file-backed results store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {id}")]
    NotFound { id: String },

    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),

    #[error("record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed store of planner results and home records.
///
/// Each record lives in `<data_dir>/<id>.json`, keyed by the plan UUID or the
/// home UPRN. This stands in for the database a production deployment would
/// use; the lookup API is shaped so a real backend could replace it without
/// touching the handlers.
#[derive(Debug, Clone)]
pub struct ResultsStore {
    data_dir: PathBuf,
}

impl ResultsStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Whether the backing data directory is reachable.
    pub async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.data_dir).await.is_ok()
    }

    /// Load the before/after energy usage for a retrofit plan.
    pub async fn before_after_energy_usage(
        &self,
        uuid: &Uuid,
    ) -> Result<BeforeAfterEnergyUsage, StoreError> {
        self.read_json(&uuid.to_string()).await
    }

    /// Load a home record by UPRN.
    pub async fn home(&self, uprn: &str) -> Result<Home, StoreError> {
        // UPRNs are numeric; anything else could escape the data directory.
        if uprn.is_empty() || !uprn.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StoreError::NotFound {
                id: uprn.to_string(),
            });
        }
        self.read_json(uprn).await
    }

    async fn read_json<T: DeserializeOwned>(&self, id: &str) -> Result<T, StoreError> {
        let path = self.data_dir.join(format!("{id}.json"));
        trace!("Reading record from {}", path.display());

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Record {} not found in store", id);
                return Err(StoreError::NotFound { id: id.to_string() });
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, ResultsStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for (name, contents) in files {
            std::fs::write(dir.path().join(format!("{name}.json")), contents)
                .expect("Failed to write test record");
        }
        let store = ResultsStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn loads_before_after_energy_usage_by_uuid() {
        let uuid = Uuid::parse_str("1e0e7511-9e40-4b13-8c52-4f9c26c41c55").unwrap();
        let (_dir, store) = store_with(&[(
            "1e0e7511-9e40-4b13-8c52-4f9c26c41c55",
            r#"{"baseline": {"1": {"energy": 10.0}}, "improved": {"1": {"energy": 8.0}}}"#,
        )]);

        let usage = store.before_after_energy_usage(&uuid).await.unwrap();

        assert_eq!(usage.baseline.len(), 1);
        assert_eq!(usage.improved[&1].energy, 8.0);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let (_dir, store) = store_with(&[]);
        let uuid = Uuid::parse_str("1e0e7511-9e40-4b13-8c52-4f9c26c41c55").unwrap();

        let err = store.before_after_energy_usage(&uuid).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_record_is_a_parse_error() {
        let uuid = Uuid::parse_str("1e0e7511-9e40-4b13-8c52-4f9c26c41c55").unwrap();
        let (_dir, store) =
            store_with(&[("1e0e7511-9e40-4b13-8c52-4f9c26c41c55", "not json at all")]);

        let err = store.before_after_energy_usage(&uuid).await.unwrap_err();

        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn non_numeric_uprn_is_rejected_before_touching_the_filesystem() {
        let (_dir, store) = store_with(&[]);

        let err = store.home("../etc/passwd").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn loads_home_by_uprn() {
        let (_dir, store) = store_with(&[(
            "906205784",
            r#"{"uprn": "906205784", "address": "1 Example Street", "epc_rating": "D"}"#,
        )]);

        let home = store.home("906205784").await.unwrap();

        assert_eq!(home.address, "1 Example Street");
        assert_eq!(home.epc_rating.as_deref(), Some("D"));
    }
}
