//! Payroll engine: gross-to-net salary computation for Indian statutory rules

pub mod calculator;
pub mod types;

pub use calculator::*;
pub use types::*;
