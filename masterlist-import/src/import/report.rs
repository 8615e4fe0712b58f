//! Per-row outcomes of an import run

use colored::*;

use crate::api::StoreError;

#[derive(Debug)]
pub enum RowOutcome {
    Inserted { title: String },
    Failed { title: String, error: StoreError },
}

impl RowOutcome {
    pub fn title(&self) -> &str {
        match self {
            RowOutcome::Inserted { title } | RowOutcome::Failed { title, .. } => title,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, RowOutcome::Inserted { .. })
    }
}

/// Summary of one run, in upload order
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows below the header, including untitled ones
    pub rows_read: usize,
    pub skipped_untitled: usize,
    /// Coercions applied during normalization
    pub warnings: usize,
    pub outcomes: Vec<RowOutcome>,
}

impl ImportReport {
    pub fn inserted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_inserted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.inserted()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &StoreError)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RowOutcome::Failed { title, error } => Some((title.as_str(), error)),
            RowOutcome::Inserted { .. } => None,
        })
    }

    pub fn print_summary(&self) {
        println!();
        println!("{}", "Import summary".bold());
        println!("  Rows read:          {}", self.rows_read);
        println!("  Skipped (no title): {}", self.skipped_untitled);
        println!("  Inserted:           {}", self.inserted().to_string().green());

        let failed = self.failed().to_string();
        if self.failed() > 0 {
            println!("  Failed:             {}", failed.red().bold());
        } else {
            println!("  Failed:             {}", failed);
        }

        if self.warnings > 0 {
            println!("  Warnings:           {}", self.warnings.to_string().yellow());
        }

        for (title, error) in self.failures() {
            println!("    {} {}: {}", "✗".red(), title, error.to_string().dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_failures() {
        let report = ImportReport {
            rows_read: 4,
            skipped_untitled: 1,
            warnings: 0,
            outcomes: vec![
                RowOutcome::Inserted { title: "A".into() },
                RowOutcome::Failed {
                    title: "B".into(),
                    error: StoreError::Api {
                        status: 409,
                        message: "duplicate".into(),
                    },
                },
                RowOutcome::Inserted { title: "C".into() },
            ],
        };

        assert_eq!(report.inserted(), 2);
        assert_eq!(report.failed(), 1);

        let failures: Vec<&str> = report.failures().map(|(title, _)| title).collect();
        assert_eq!(failures, vec!["B"]);
        assert_eq!(report.outcomes[1].title(), "B");
    }
}
