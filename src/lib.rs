//! # Payops Core
//!
//! Payroll calculation and double-entry finance core for multi-tenant
//! business-operations applications.
//!
//! ## Features
//!
//! - **Payroll calculator**: gross-to-net salary computation for Indian
//!   statutory rules (PF, ESIC, professional tax) with loss-of-pay
//!   proration and cost-to-company derivation. Pure, no I/O.
//! - **Finance ledger**: balanced double-entry journal entries, automated
//!   invoice/payment posting, trial balance, idempotent default chart of
//!   accounts.
//! - **Finance reports**: profit & loss, balance sheet with a
//!   self-verifying check value, trailing monthly metrics.
//! - **Backfill**: replay of existing invoices/payments into a freshly
//!   introduced ledger, with per-record error tolerance.
//! - **Storage abstraction**: database-agnostic design with a trait-based
//!   storage backend injected at construction time.
//!
//! ## Quick Start
//!
//! ```rust
//! use payops_core::{FinanceService, MemoryStorage};
//!
//! # async fn example() -> payops_core::FinanceResult<()> {
//! let mut service = FinanceService::new(MemoryStorage::new());
//! service.ensure_default_accounts("acme").await?;
//! # Ok(())
//! # }
//! ```

pub mod backfill;
pub mod ledger;
pub mod payroll;
pub mod reports;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use backfill::*;
pub use ledger::*;
pub use payroll::*;
pub use reports::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_storage::MemoryStorage;
