//! Core types and data structures shared across the finance and payroll engines

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account types following standard accounting principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Assets - what the business owns (Bank, Accounts Receivable, etc.)
    Asset,
    /// Liabilities - what the business owes (Accounts Payable, Tax Payable, etc.)
    Liability,
    /// Equity - owner's interest in the business (Retained Earnings, etc.)
    Equity,
    /// Revenue - money earned by the business
    Revenue,
    /// Expenses - costs incurred by the business
    Expense,
}

/// The side on which an account type's balance is conventionally positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceSide {
    Debit,
    Credit,
}

impl AccountType {
    /// Returns the normal balance side for this account type.
    /// Assets and Expenses normally carry debit balances;
    /// Liabilities, Equity, and Revenue carry credit balances.
    pub fn normal_balance(&self) -> BalanceSide {
        match self {
            AccountType::Asset | AccountType::Expense => BalanceSide::Debit,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue => {
                BalanceSide::Credit
            }
        }
    }
}

/// Chart-of-accounts entry, owned by a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: String,
    /// Owning company (tenant)
    pub company_id: String,
    /// Account code within the company's chart (e.g. "1200")
    pub code: String,
    /// Human-readable account name
    pub name: String,
    /// Type of account (Asset, Liability, etc.)
    pub account_type: AccountType,
    /// Inactive accounts are excluded from the trial balance
    pub is_active: bool,
}

impl Account {
    /// Create a new active account with a generated id
    pub fn new(company_id: String, code: String, name: String, account_type: AccountType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_id,
            code,
            name,
            account_type,
            is_active: true,
        }
    }
}

/// Journal entry lifecycle status. The core only ever creates posted
/// entries; no draft/void/reversal states are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Posted,
}

/// Journal entry header. Immutable once created; corrections require new
/// offsetting entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for the entry
    pub id: String,
    /// Owning company (tenant)
    pub company_id: String,
    /// Sequential number formatted `JE-<year>-<6-digit-seq>`
    pub entry_number: String,
    /// Date the entry takes effect
    pub date: NaiveDate,
    /// Description of the entry
    pub description: String,
    /// Optional reference (invoice number, transaction id, etc.)
    pub reference: Option<String>,
    /// Optional identity of who posted the entry
    pub posted_by: Option<String>,
    /// Entry status
    pub status: EntryStatus,
}

/// Journal line, child of a journal entry. Debit and credit are both
/// non-negative; in practice one of the two is zero per line, but that is
/// not type-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier for the line
    pub id: String,
    /// Parent journal entry
    pub journal_entry_id: String,
    /// Account affected by this line
    pub account_id: String,
    /// Line-level description
    pub description: String,
    /// Debit amount
    pub debit: BigDecimal,
    /// Credit amount
    pub credit: BigDecimal,
}

/// Invoice record consumed by the posting automation. Owned by the billing
/// side of the application, never mutated by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub company_id: String,
    pub invoice_number: String,
    /// Amount excluding tax
    pub amount: BigDecimal,
    /// Tax portion
    pub tax: BigDecimal,
    /// Amount including tax
    pub total: BigDecimal,
}

/// Payment record consumed by the posting automation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub company_id: String,
    /// Invoice being paid off, if any
    pub invoice_id: Option<String>,
    /// Denormalized invoice number for entry descriptions
    pub invoice_number: Option<String>,
    pub amount: BigDecimal,
    pub payment_date: NaiveDate,
    /// Gateway transaction id; absent for cash payments
    pub transaction_id: Option<String>,
}

/// Errors that can occur in the finance core
#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for finance operations
pub type FinanceResult<T> = Result<T, FinanceError>;
