//! Destination seam for imported projects

use async_trait::async_trait;
use log::info;

use super::error::StoreError;
use crate::import::ProjectRecord;

/// Somewhere project records can be inserted, one at a time
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Human-readable destination, used in log lines
    fn describe(&self) -> String;

    /// Insert one record; each call is independent of the others
    async fn insert_project(&self, record: &ProjectRecord) -> Result<(), StoreError>;
}

/// Logs the payload that would be sent instead of sending it
#[derive(Debug, Default)]
pub struct DryRunStore;

#[async_trait]
impl ProjectStore for DryRunStore {
    fn describe(&self) -> String {
        "dry run (nothing is sent)".to_string()
    }

    async fn insert_project(&self, record: &ProjectRecord) -> Result<(), StoreError> {
        let payload = serde_json::to_string(record)?;
        info!("Would insert: {}", payload);
        Ok(())
    }
}
