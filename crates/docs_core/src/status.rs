use std::collections::BTreeMap;

/// Maps the one-letter status code shown on the PEP index to the full
/// statuses a PEP page may carry for that code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatusMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl ExpectedStatusMap {
    pub fn from_entries<I, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, statuses)| {
                    (code.into(), statuses.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// Status table published on peps.python.org.
    pub fn peps() -> Self {
        Self::from_entries([
            ("A", vec!["Active", "Accepted"]),
            ("D", vec!["Deferred"]),
            ("F", vec!["Final"]),
            ("P", vec!["Provisional"]),
            ("R", vec!["Rejected"]),
            ("S", vec!["Superseded"]),
            ("W", vec!["Withdrawn"]),
            ("", vec!["Draft", "Active"]),
        ])
    }

    pub fn expected(&self, code: &str) -> Option<&[String]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for ExpectedStatusMap {
    fn default() -> Self {
        Self::peps()
    }
}
