use super::*;
use crate::net::types::TestCaseKind;

fn case(name: &str, package: &str) -> TestCaseSummary {
    TestCaseSummary {
        name: name.to_owned(),
        package: package.to_owned(),
        kind: TestCaseKind::Java,
    }
}

// =============================================================
// Matching
// =============================================================

#[test]
fn empty_query_matches_everything() {
    let filter = TestCaseFilter::default();
    assert!(filter.matches(&case("EchoActionTest", "com.consol.citrus.actions")));
}

#[test]
fn whitespace_query_matches_everything() {
    let filter = TestCaseFilter { query: "   ".to_owned() };
    assert!(filter.matches(&case("EchoActionTest", "com.consol.citrus.actions")));
}

#[test]
fn query_matches_name_case_insensitively() {
    let filter = TestCaseFilter { query: "echo".to_owned() };
    assert!(filter.matches(&case("EchoActionTest", "com.consol.citrus.actions")));
}

#[test]
fn query_matches_package() {
    let filter = TestCaseFilter { query: "actions".to_owned() };
    assert!(filter.matches(&case("EchoActionTest", "com.consol.citrus.actions")));
}

#[test]
fn query_rejects_unrelated_case() {
    let filter = TestCaseFilter { query: "sleep".to_owned() };
    assert!(!filter.matches(&case("EchoActionTest", "com.consol.citrus.actions")));
}

// =============================================================
// Apply
// =============================================================

#[test]
fn apply_preserves_order() {
    let cases = [
        case("AssertTest", "com.consol.citrus"),
        case("EchoActionTest", "com.consol.citrus.actions"),
        case("SleepActionTest", "com.consol.citrus.actions"),
    ];
    let filter = TestCaseFilter { query: "action".to_owned() };
    let matched = filter.apply(&cases);

    let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["EchoActionTest", "SleepActionTest"]);
}

#[test]
fn apply_with_empty_query_returns_all() {
    let cases = [case("AssertTest", "com.consol.citrus")];
    let filter = TestCaseFilter::default();
    assert_eq!(filter.apply(&cases).len(), 1);
}
