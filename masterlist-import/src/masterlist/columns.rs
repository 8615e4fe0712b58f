//! Header text of the masterlist columns
//!
//! Matched exactly, including case and whitespace.

pub const STATUS: &str = "Status";
pub const TITLE: &str = "Title";
pub const CATEGORY: &str = "Category";
pub const SUBCATEGORY: &str = "Subcategory";
pub const PRIMARY_OUTCOME: &str = "Primary Outcome";
pub const PDSA_CYCLE: &str = "PDSA Cycle";
pub const PROPONENTS: &str = "Proponents (Leads on Bold)";
pub const FACULTY: &str = "Faculty";
/// The sheet carries a trailing space in this header
pub const UPDATES_AND_BARRIERS: &str = "Updates and Barriers ";

pub const REQUIRED: [&str; 9] = [
    STATUS,
    TITLE,
    CATEGORY,
    SUBCATEGORY,
    PRIMARY_OUTCOME,
    PDSA_CYCLE,
    PROPONENTS,
    FACULTY,
    UPDATES_AND_BARRIERS,
];
