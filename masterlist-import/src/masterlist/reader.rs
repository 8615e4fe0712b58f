//! Read project rows from the masterlist workbook
//!
//! The header row is an absolute sheet position (0-based). calamine trims
//! leading empty rows from the used range, so all lookups go through
//! absolute coordinates rather than `Range::rows()`.

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use log::debug;
use std::collections::HashMap;
use std::io::{Read, Seek};

use super::columns;
use crate::config::SourceConfig;

/// A titled data row with each cell in its string form
///
/// `None` means the cell was empty. Blank strings are kept as-is and
/// handled during normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProjectRow {
    /// 1-based row number as shown in Excel
    pub sheet_row: u32,
    pub status: Option<String>,
    /// Trimmed, never blank
    pub title: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub primary_outcome: Option<String>,
    pub pdsa_cycle: Option<String>,
    pub proponents: Option<String>,
    pub faculty: Option<String>,
    pub updates_and_barriers: Option<String>,
}

/// Parsed contents of the masterlist sheet
#[derive(Debug, Clone, Default)]
pub struct MasterlistSheet {
    pub rows: Vec<RawProjectRow>,
    /// Number of rows below the header, titled or not
    pub data_rows: usize,
    /// Rows dropped because the title was missing or blank
    pub skipped_untitled: usize,
}

/// Open the configured workbook and read its masterlist sheet
pub fn read_masterlist(source: &SourceConfig) -> Result<MasterlistSheet> {
    let mut workbook: Xlsx<_> = open_workbook(&source.path)
        .with_context(|| format!("Failed to open Excel file: {}", source.path.display()))?;

    read_masterlist_from(&mut workbook, &source.sheet, source.header_row)
}

/// Read the masterlist sheet from an already opened workbook
pub fn read_masterlist_from<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    sheet: &str,
    header_row: u32,
) -> Result<MasterlistSheet> {
    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet) {
        bail!(
            "Sheet '{}' not found (available: {})",
            sheet,
            sheet_names.join(", ")
        );
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Failed to read sheet: {}", sheet))?;

    parse_range(&range, header_row).with_context(|| format!("Invalid layout in sheet '{}'", sheet))
}

/// Extract titled rows from a sheet range
pub fn parse_range(range: &Range<Data>, header_row: u32) -> Result<MasterlistSheet> {
    let (Some((_, start_col)), Some((end_row, end_col))) = (range.start(), range.end()) else {
        bail!("Sheet is empty");
    };

    let header = find_columns(range, header_row, start_col, end_col)?;
    let mut sheet = MasterlistSheet::default();

    for row in header_row.saturating_add(1)..=end_row {
        sheet.data_rows += 1;

        let cell = |name: &str| {
            header
                .get(name)
                .and_then(|col| range.get_value((row, *col)))
                .and_then(cell_string)
        };

        let title = match cell(columns::TITLE) {
            Some(title) if !title.trim().is_empty() => title.trim().to_string(),
            _ => {
                debug!("Skipping row {}: no title", row + 1);
                sheet.skipped_untitled += 1;
                continue;
            }
        };

        sheet.rows.push(RawProjectRow {
            sheet_row: row + 1,
            status: cell(columns::STATUS),
            title,
            category: cell(columns::CATEGORY),
            subcategory: cell(columns::SUBCATEGORY),
            primary_outcome: cell(columns::PRIMARY_OUTCOME),
            pdsa_cycle: cell(columns::PDSA_CYCLE),
            proponents: cell(columns::PROPONENTS),
            faculty: cell(columns::FACULTY),
            updates_and_barriers: cell(columns::UPDATES_AND_BARRIERS),
        });
    }

    debug!(
        "Read {} data rows ({} titled, {} skipped)",
        sheet.data_rows,
        sheet.rows.len(),
        sheet.skipped_untitled
    );

    Ok(sheet)
}

/// Map every required header to its column, failing with the full list of missing ones
fn find_columns(
    range: &Range<Data>,
    header_row: u32,
    start_col: u32,
    end_col: u32,
) -> Result<HashMap<&'static str, u32>> {
    let mut found = HashMap::new();

    for col in start_col..=end_col {
        let Some(Data::String(text)) = range.get_value((header_row, col)) else {
            continue;
        };
        if let Some(name) = columns::REQUIRED.iter().find(|name| **name == text.as_str()) {
            // First occurrence wins for duplicated headers
            found.entry(*name).or_insert(col);
        }
    }

    let missing: Vec<String> = columns::REQUIRED
        .iter()
        .filter(|name| !found.contains_key(*name))
        .map(|name| format!("{:?}", name))
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing required columns in header row {}: {}",
            header_row,
            missing.join(", ")
        );
    }

    Ok(found)
}

/// String form of a cell, `None` for empty and error cells
pub fn cell_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(format!("{}", dt)),
        Data::DateTimeIso(s) => Some(s.clone()),
        Data::DurationIso(s) => Some(s.clone()),
    }
}
