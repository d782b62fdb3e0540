#[cfg(test)]
#[path = "testcases_test.rs"]
mod testcases_test;

use crate::net::types::TestCaseSummary;

/// Client-side name filter applied to the discovered test cases.
#[derive(Clone, Debug, Default)]
pub struct TestCaseFilter {
    pub query: String,
}

impl TestCaseFilter {
    /// An empty query matches everything; otherwise the query must occur
    /// in the name or the package, case-insensitively.
    #[must_use]
    pub fn matches(&self, case: &TestCaseSummary) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        case.name.to_lowercase().contains(&query)
            || case.package.to_lowercase().contains(&query)
    }

    /// Filter `cases` down to the matching ones, preserving order.
    #[must_use]
    pub fn apply(&self, cases: &[TestCaseSummary]) -> Vec<TestCaseSummary> {
        cases.iter().filter(|case| self.matches(case)).cloned().collect()
    }
}
