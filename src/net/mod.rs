//! Network layer: REST API helpers and shared wire types.

pub mod api;
pub mod types;
