use crate::table::{ResultTable, TableError};

pub const TOTAL_LABEL: &str = "Total";

/// A PEP whose page status is not one the index code allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    pub page_url: String,
    pub actual: String,
    pub expected: Vec<String>,
}

/// Per-status counts in first-seen order plus a running total.
///
/// `total` always equals the sum of the per-status counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLedger {
    counts: Vec<(String, u64)>,
    total: u64,
}

impl StatusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one PEP under `actual`. Returns the mismatch when `actual` is
    /// not in `expected`; the PEP is counted either way.
    pub fn record(
        &mut self,
        page_url: &str,
        actual: &str,
        expected: &[String],
    ) -> Option<StatusMismatch> {
        match self.counts.iter_mut().find(|(status, _)| status == actual) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((actual.to_string(), 1)),
        }
        self.total += 1;

        if expected.iter().any(|status| status == actual) {
            None
        } else {
            Some(StatusMismatch {
                page_url: page_url.to_string(),
                actual: actual.to_string(),
                expected: expected.to_vec(),
            })
        }
    }

    pub fn count(&self, status: &str) -> u64 {
        self.counts
            .iter()
            .find(|(label, _)| label == status)
            .map_or(0, |(_, count)| *count)
    }

    pub fn counts(&self) -> &[(String, u64)] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(Status, Count)` table with a trailing `Total` row.
    pub fn into_table(self) -> Result<ResultTable, TableError> {
        let mut table = ResultTable::new(["Status", "Count"]);
        for (status, count) in self.counts {
            table.push_row([status, count.to_string()])?;
        }
        table.push_row([TOTAL_LABEL.to_string(), self.total.to_string()])?;
        Ok(table)
    }
}
