//! Parse → normalize → upload, one row at a time

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use super::normalize::normalize_row;
use super::report::{ImportReport, RowOutcome};
use crate::api::ProjectStore;
use crate::config::SourceConfig;
use crate::masterlist::{MasterlistSheet, read_masterlist};

/// Read the configured masterlist and upload every titled row to `store`
///
/// Only source errors (unreadable workbook, bad layout) are returned;
/// per-row store failures end up in the report.
pub async fn import_masterlist<S>(source: &SourceConfig, store: &S) -> Result<ImportReport>
where
    S: ProjectStore + ?Sized,
{
    info!("Reading Excel Masterlist...");
    let sheet = read_masterlist(source)?;
    Ok(run_import(sheet, store, Utc::now()).await)
}

/// Normalize all rows, then insert them sequentially
///
/// A failed insert is logged and recorded; the next row is still attempted.
pub async fn run_import<S>(sheet: MasterlistSheet, store: &S, imported_at: DateTime<Utc>) -> ImportReport
where
    S: ProjectStore + ?Sized,
{
    let mut report = ImportReport {
        rows_read: sheet.data_rows,
        skipped_untitled: sheet.skipped_untitled,
        ..Default::default()
    };

    let mut records = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        let normalized = normalize_row(row, imported_at);
        for warning in &normalized.warnings {
            warn!("Row {} ({}): {}", row.sheet_row, row.title, warning);
        }
        report.warnings += normalized.warnings.len();
        records.push(normalized.record);
    }

    info!(
        "Found {} projects. Uploading to {}...",
        records.len(),
        store.describe()
    );

    for record in records {
        let outcome = match store.insert_project(&record).await {
            Ok(()) => {
                info!("Inserted: {}", record.title);
                RowOutcome::Inserted { title: record.title }
            }
            Err(e) => {
                error!("Error inserting {}: {}", record.title, e);
                RowOutcome::Failed {
                    title: record.title,
                    error: e,
                }
            }
        };
        report.outcomes.push(outcome);
    }

    report
}
