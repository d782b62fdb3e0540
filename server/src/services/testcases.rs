//! Test-case discovery over the project tree.
//!
//! DESIGN
//! ======
//! Citrus projects define test cases two ways: XML test definitions
//! kept under a `tests` directory, and Java test classes named
//! `*Test.java` or `*IT.java`. The scanner walks the project home,
//! skipping `target` and hidden directories, classifies both forms,
//! and derives the package from the path relative to the source root
//! (`java` for classes, `tests` for XML definitions).

#[cfg(test)]
#[path = "testcases_test.rs"]
mod testcases_test;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("project home {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a test case is defined in the project sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestCaseKind {
    Xml,
    Java,
}

/// One discovered test case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub package: String,
    pub kind: TestCaseKind,
}

/// Counts over the discovered test cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TestStatistics {
    pub total: usize,
    pub xml: usize,
    pub java: usize,
}

/// Walk `project_home` and collect its test cases, sorted by name.
pub fn scan_test_cases(project_home: &Path) -> Result<Vec<TestCase>, ScanError> {
    if !project_home.is_dir() {
        return Err(ScanError::NotADirectory(project_home.to_path_buf()));
    }
    let mut cases = Vec::new();
    collect(project_home, &mut cases)?;
    cases.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.package.cmp(&b.package)));
    Ok(cases)
}

/// Counts by kind over an already-scanned case list.
#[must_use]
pub fn statistics(cases: &[TestCase]) -> TestStatistics {
    let xml = cases.iter().filter(|c| c.kind == TestCaseKind::Xml).count();
    TestStatistics { total: cases.len(), xml, java: cases.len() - xml }
}

fn collect(dir: &Path, out: &mut Vec<TestCase>) -> Result<(), ScanError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| ScanError::Read { path: dir.to_path_buf(), source })?;
    for entry in entries {
        let entry =
            entry.map_err(|source| ScanError::Read { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        if path.is_dir() {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if name == "target" || name.starts_with('.') {
                continue;
            }
            collect(&path, out)?;
        } else if let Some(case) = classify(&path) {
            out.push(case);
        }
    }
    Ok(())
}

/// Classify a file as a Citrus test source, if it is one.
fn classify(path: &Path) -> Option<TestCase> {
    let file_name = path.file_name()?.to_str()?;

    if let Some(stem) = file_name.strip_suffix(".java") {
        if stem.ends_with("Test") || stem.ends_with("IT") {
            return Some(TestCase {
                name: stem.to_owned(),
                package: package_after(path, "java"),
                kind: TestCaseKind::Java,
            });
        }
        return None;
    }

    if let Some(stem) = file_name.strip_suffix(".xml") {
        if has_ancestor(path, "tests") {
            return Some(TestCase {
                name: stem.to_owned(),
                package: package_after(path, "tests"),
                kind: TestCaseKind::Xml,
            });
        }
    }

    None
}

/// Dotted package: the directories between the last `marker` component
/// and the file itself. Empty when the file sits directly under the
/// marker or the marker is absent.
fn package_after(path: &Path, marker: &str) -> String {
    let Some(parent) = path.parent() else {
        return String::new();
    };
    let components: Vec<&str> = parent
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    let Some(idx) = components.iter().rposition(|c| *c == marker) else {
        return String::new();
    };
    components[idx + 1..].join(".")
}

fn has_ancestor(path: &Path, marker: &str) -> bool {
    path.parent().is_some_and(|parent| {
        parent
            .components()
            .any(|c| c.as_os_str().to_str() == Some(marker))
    })
}
