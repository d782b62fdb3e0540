//! Network layer: wire types and REST helpers for the admin API.

pub mod api;
pub mod types;
