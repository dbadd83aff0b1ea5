//! CLI command implementations

pub mod frame;
pub mod generate;
pub mod interactive;
pub mod json_output;
pub mod series;
pub mod validate;

mod reporting;
