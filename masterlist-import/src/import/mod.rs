//! Masterlist → `projects` import pipeline

pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod report;

pub use pipeline::import_masterlist;
pub use record::ProjectRecord;
pub use report::ImportReport;
