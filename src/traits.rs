//! Storage abstraction for the finance core
//!
//! The ledger service and report layer never touch a database directly.
//! Backends (PostgreSQL, SQLite, in-memory, etc.) implement [`FinanceStorage`]
//! and are injected explicitly at construction time; there is no ambient
//! global connection state.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::payroll::StatutorySettings;
use crate::types::*;

/// Storage backend for accounts, journal entries, and the consumed
/// invoice/payment/statutory records.
#[async_trait]
pub trait FinanceStorage: Send + Sync {
    /// Save a new account
    async fn save_account(&mut self, account: &Account) -> FinanceResult<()>;

    /// Get an account by id, scoped to a company
    async fn get_account(
        &self,
        company_id: &str,
        account_id: &str,
    ) -> FinanceResult<Option<Account>>;

    /// Find an account by chart code within a company
    async fn find_account_by_code(
        &self,
        company_id: &str,
        code: &str,
    ) -> FinanceResult<Option<Account>>;

    /// List a company's accounts, optionally filtered by type
    async fn list_accounts(
        &self,
        company_id: &str,
        account_type: Option<AccountType>,
    ) -> FinanceResult<Vec<Account>>;

    /// Next sequence number for journal entry numbering within a company.
    ///
    /// The in-memory backend counts existing entries, which is racy under
    /// concurrent posting (two callers can observe the same count). SQL
    /// backends should map this to an atomic sequence or enforce a unique
    /// constraint on the entry number and retry on conflict.
    async fn next_entry_sequence(&self, company_id: &str) -> FinanceResult<u64>;

    /// Persist an entry header and its lines as one atomic unit.
    /// Either everything is stored or nothing is.
    async fn save_journal_entry(
        &mut self,
        entry: &JournalEntry,
        lines: &[JournalLine],
    ) -> FinanceResult<()>;

    /// Find an entry by its reference string within a company.
    /// Used as the duplicate probe before automated posting.
    async fn find_entry_by_reference(
        &self,
        company_id: &str,
        reference: &str,
    ) -> FinanceResult<Option<JournalEntry>>;

    /// Lines touching an account together with their parent entries,
    /// restricted to posted entries within the optional date range,
    /// ordered by entry date ascending.
    async fn lines_for_account(
        &self,
        company_id: &str,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> FinanceResult<Vec<(JournalEntry, JournalLine)>>;

    /// Get an invoice by id
    async fn get_invoice(&self, company_id: &str, invoice_id: &str)
        -> FinanceResult<Option<Invoice>>;

    /// List all invoices for a company
    async fn list_invoices(&self, company_id: &str) -> FinanceResult<Vec<Invoice>>;

    /// Get a payment by id
    async fn get_payment(&self, company_id: &str, payment_id: &str)
        -> FinanceResult<Option<Payment>>;

    /// List all payments for a company
    async fn list_payments(&self, company_id: &str) -> FinanceResult<Vec<Payment>>;

    /// Per-company statutory payroll configuration, if any has been set up.
    /// Callers fall back to [`StatutorySettings::default`] when absent.
    async fn statutory_settings(&self, company_id: &str)
        -> FinanceResult<Option<StatutorySettings>>;
}
