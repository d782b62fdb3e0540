//! Wire types for the admin API.
//!
//! These mirror the JSON shapes the server produces; field names are the
//! wire contract, so changes here must track the server's responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// How a test case is defined in the project sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseKind {
    Xml,
    Java,
}

impl TestCaseKind {
    /// Label shown in the test-case table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TestCaseKind::Xml => "XML",
            TestCaseKind::Java => "Java",
        }
    }
}

/// One discovered test case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseSummary {
    pub name: String,
    pub package: String,
    pub kind: TestCaseKind,
}

/// Counts over the discovered test cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStatistics {
    pub total: usize,
    pub xml: usize,
    pub java: usize,
}
