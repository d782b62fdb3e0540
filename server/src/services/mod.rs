//! Services backing the admin API.

pub mod project;
pub mod testcases;
