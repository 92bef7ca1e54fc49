//! CLI library components for rowgate.

pub mod logging;
pub mod pipeline;
pub mod types;
