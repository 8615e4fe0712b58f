//! Command-line surface
//!
//! Running with no arguments performs the standard masterlist import; every
//! flag only overrides a default.

pub mod handler;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_ENV_FILE, DEFAULT_HEADER_ROW, DEFAULT_SHEET, DEFAULT_WORKBOOK, SourceConfig,
};

pub use handler::handle_import_command;

#[derive(Debug, Parser)]
#[command(
    name = "masterlist-import",
    version,
    about = "Import the QI project masterlist into the Supabase projects table"
)]
pub struct ImportArgs {
    /// Path to the masterlist workbook
    #[arg(long, default_value = DEFAULT_WORKBOOK)]
    pub file: PathBuf,

    /// Worksheet holding the masterlist
    #[arg(long, default_value = DEFAULT_SHEET)]
    pub sheet: String,

    /// 0-based sheet row holding the column headers
    #[arg(long, default_value_t = DEFAULT_HEADER_ROW)]
    pub header_row: u32,

    /// Env file read before resolving store credentials
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Parse and log records without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl ImportArgs {
    pub fn source(&self) -> SourceConfig {
        SourceConfig {
            path: self.file.clone(),
            sheet: self.sheet.clone(),
            header_row: self.header_row,
        }
    }
}
