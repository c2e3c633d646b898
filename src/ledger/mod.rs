//! Ledger module: double-entry journal posting, trial balance, and the
//! default chart of accounts

pub mod chart;
pub mod entry;
pub mod service;

pub use chart::*;
pub use entry::*;
pub use service::*;
