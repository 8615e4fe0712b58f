//! Masterlist workbook access

pub mod columns;
pub mod reader;

pub use reader::{MasterlistSheet, RawProjectRow, read_masterlist};
