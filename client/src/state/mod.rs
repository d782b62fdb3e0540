//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `project`, `testcases`) so pages
//! and components can depend on small focused models. Everything here
//! is plain data; the shell wraps each in a reactive signal and
//! provides it via context.

pub mod nav;
pub mod project;
pub mod testcases;
