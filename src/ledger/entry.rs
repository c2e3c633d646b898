//! Journal entry input types, balance validation, and a builder

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{FinanceError, FinanceResult};

/// One line of a journal entry being created. Omitted debit/credit
/// amounts default to zero; an omitted description inherits the entry's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJournalLine {
    pub account_id: String,
    pub debit: Option<BigDecimal>,
    pub credit: Option<BigDecimal>,
    pub description: Option<String>,
}

impl NewJournalLine {
    pub fn debit_amount(&self) -> BigDecimal {
        self.debit.clone().unwrap_or_default()
    }

    pub fn credit_amount(&self) -> BigDecimal {
        self.credit.clone().unwrap_or_default()
    }
}

/// A journal entry awaiting creation through
/// [`FinanceService::create_journal_entry`](crate::ledger::FinanceService::create_journal_entry),
/// which is the only write path into the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub description: String,
    pub reference: Option<String>,
    pub posted_by: Option<String>,
    pub lines: Vec<NewJournalLine>,
}

impl NewJournalEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
            reference: None,
            posted_by: None,
            lines: Vec::new(),
        }
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn posted_by(mut self, posted_by: impl Into<String>) -> Self {
        self.posted_by = Some(posted_by.into());
        self
    }

    /// Add a debit line
    pub fn debit(
        mut self,
        account_id: impl Into<String>,
        amount: BigDecimal,
        description: Option<String>,
    ) -> Self {
        self.lines.push(NewJournalLine {
            account_id: account_id.into(),
            debit: Some(amount),
            credit: None,
            description,
        });
        self
    }

    /// Add a credit line
    pub fn credit(
        mut self,
        account_id: impl Into<String>,
        amount: BigDecimal,
        description: Option<String>,
    ) -> Self {
        self.lines.push(NewJournalLine {
            account_id: account_id.into(),
            debit: None,
            credit: Some(amount),
            description,
        });
        self
    }

    /// Sum of debit amounts across lines
    pub fn total_debits(&self) -> BigDecimal {
        self.lines.iter().map(|l| l.debit_amount()).sum()
    }

    /// Sum of credit amounts across lines
    pub fn total_credits(&self) -> BigDecimal {
        self.lines.iter().map(|l| l.credit_amount()).sum()
    }

    /// Check the double-entry invariant: exact decimal equality, no epsilon
    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }

    /// Validate the entry before persisting. An unbalanced or zero-total
    /// entry must never reach storage.
    pub fn validate(&self) -> FinanceResult<()> {
        let debits = self.total_debits();
        let credits = self.total_credits();

        if debits != credits {
            return Err(FinanceError::Validation(format!(
                "Journal entry is not balanced. Total debit: {debits}, total credit: {credits}"
            )));
        }

        if debits == BigDecimal::from(0) {
            return Err(FinanceError::Validation(
                "Journal entry cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb_1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn balanced_entry_validates() {
        let entry = NewJournalEntry::new(feb_1(), "Sale")
            .debit("ar", BigDecimal::from(1180), None)
            .credit("rev", BigDecimal::from(1000), None)
            .credit("tax", BigDecimal::from(180), None);
        assert!(entry.is_balanced());
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn unbalanced_entry_rejected() {
        let entry = NewJournalEntry::new(feb_1(), "Broken")
            .debit("ar", BigDecimal::from(100), None)
            .credit("rev", BigDecimal::from(90), None);
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("not balanced"));
    }

    #[test]
    fn zero_entry_rejected() {
        let entry = NewJournalEntry::new(feb_1(), "Empty")
            .debit("ar", BigDecimal::from(0), None)
            .credit("rev", BigDecimal::from(0), None);
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn entry_with_no_lines_rejected() {
        let entry = NewJournalEntry::new(feb_1(), "Nothing");
        assert!(entry.validate().is_err());
    }
}
