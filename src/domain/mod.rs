//! Domain analysis: what inputs an expression accepts

mod analyzer;
pub mod constants;
mod types;

pub use analyzer::analyze;
pub use types::{Domain, Interval};
