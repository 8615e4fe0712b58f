//! Import command handler

use anyhow::Result;
use log::{error, info};

use super::ImportArgs;
use crate::api::{DryRunStore, ProjectStore, SupabaseClient};
use crate::config::{self, ImportConfig, StoreConfig};
use crate::import::{ImportReport, import_masterlist};

/// Run the import described by `args` against the live store
pub async fn handle_import_command(args: ImportArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    config::load_env_file(&args.env_file);

    let report = run_with(&args, config::env_lookup, |store| {
        SupabaseClient::new(store).map_err(anyhow::Error::from)
    })
    .await?;

    if let Some(report) = report {
        report.print_summary();
    }

    Ok(())
}

/// Resolve configuration, then import
///
/// Returns `Ok(None)` when store settings are missing: the diagnostic is
/// logged, `connect` is never called and the workbook is never opened.
pub async fn run_with<L, C, S>(args: &ImportArgs, lookup: L, connect: C) -> Result<Option<ImportReport>>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&StoreConfig) -> Result<S>,
    S: ProjectStore,
{
    if args.dry_run {
        info!("Dry run: records are logged, not sent");
        let report = import_masterlist(&args.source(), &DryRunStore).await?;
        return Ok(Some(report));
    }

    let config = match ImportConfig::resolve(args.source(), lookup) {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {} (env file: {})", e, args.env_file.display());
            return Ok(None);
        }
    };

    let store = connect(&config.store)?;
    let report = import_masterlist(&config.source, &store).await?;
    Ok(Some(report))
}
