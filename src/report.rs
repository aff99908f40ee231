use std::{collections::HashMap, fmt::Display, path::PathBuf};

use strum::IntoEnumIterator;

use crate::{
    models::{SubmissionRecord, SubmissionStatus},
    utils::formatting::format_submission_time,
};

/// Final state of every submission processed in one run.
#[derive(Debug)]
pub struct RunSummary {
    pub root: PathBuf,
    pub records: Vec<SubmissionRecord>,
}

impl RunSummary {
    pub fn new(root: PathBuf, records: Vec<SubmissionRecord>) -> RunSummary {
        RunSummary { root, records }
    }

    /// Number of records per status. Statuses with no records are left out.
    pub fn status_counts(&self) -> HashMap<SubmissionStatus, usize> {
        let mut counts = HashMap::new();

        for record in &self.records {
            *counts.entry(record.status).or_insert(0) += 1;
        }

        counts
    }

    pub fn count(&self, status: SubmissionStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} submission(s) in {}",
            self.records.len(),
            self.root.display()
        )?;

        for record in &self.records {
            write!(
                f,
                "{}: {} ({}",
                record.key(),
                record.status,
                format_submission_time(record.submitted_at)
            )?;

            if let Some(address) = &record.clone_address {
                write!(f, ", {address}")?;
            }

            writeln!(f, ")")?;

            if let Some(error) = &record.clone_error {
                writeln!(f, "    {}", error.trim())?;
            }
        }

        let counts = self.status_counts();
        let totals = SubmissionStatus::iter()
            .filter_map(|status| counts.get(&status).map(|count| format!("{status}: {count}")))
            .collect::<Vec<String>>()
            .join(", ");

        if !totals.is_empty() {
            writeln!(f, "{totals}")?;
        }

        Ok(())
    }
}
