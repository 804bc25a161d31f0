//! HTTP handler modules.
//! Used by: server.

pub mod apps;
pub mod charts;
pub mod ops;
