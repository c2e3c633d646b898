//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::payroll::StatutorySettings;
use crate::traits::FinanceStorage;
use crate::types::*;

/// In-memory [`FinanceStorage`] backend. Clones share the same underlying
/// maps, so a service and a report layer constructed from clones observe
/// each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    entries: Arc<RwLock<HashMap<String, JournalEntry>>>,
    lines: Arc<RwLock<Vec<JournalLine>>>,
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
    payments: Arc<RwLock<HashMap<String, Payment>>>,
    statutory: Arc<RwLock<HashMap<String, StatutorySettings>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an invoice record (owned by the billing side in production)
    pub fn insert_invoice(&self, invoice: Invoice) {
        self.invoices
            .write()
            .unwrap()
            .insert(invoice.id.clone(), invoice);
    }

    /// Seed a payment record
    pub fn insert_payment(&self, payment: Payment) {
        self.payments
            .write()
            .unwrap()
            .insert(payment.id.clone(), payment);
    }

    /// Seed per-company statutory payroll configuration
    pub fn insert_statutory_settings(&self, company_id: &str, settings: StatutorySettings) {
        self.statutory
            .write()
            .unwrap()
            .insert(company_id.to_string(), settings);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
        self.entries.write().unwrap().clear();
        self.lines.write().unwrap().clear();
        self.invoices.write().unwrap().clear();
        self.payments.write().unwrap().clear();
        self.statutory.write().unwrap().clear();
    }
}

#[async_trait]
impl FinanceStorage for MemoryStorage {
    async fn save_account(&mut self, account: &Account) -> FinanceResult<()> {
        self.accounts
            .write()
            .unwrap()
            .insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn get_account(
        &self,
        company_id: &str,
        account_id: &str,
    ) -> FinanceResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .get(account_id)
            .filter(|a| a.company_id == company_id)
            .cloned())
    }

    async fn find_account_by_code(
        &self,
        company_id: &str,
        code: &str,
    ) -> FinanceResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .values()
            .find(|a| a.company_id == company_id && a.code == code)
            .cloned())
    }

    async fn list_accounts(
        &self,
        company_id: &str,
        account_type: Option<AccountType>,
    ) -> FinanceResult<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let mut filtered: Vec<Account> = accounts
            .values()
            .filter(|a| a.company_id == company_id)
            .filter(|a| account_type.is_none_or(|t| a.account_type == t))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(filtered)
    }

    async fn next_entry_sequence(&self, company_id: &str) -> FinanceResult<u64> {
        let count = self
            .entries
            .read()
            .unwrap()
            .values()
            .filter(|e| e.company_id == company_id)
            .count() as u64;
        Ok(count + 1)
    }

    async fn save_journal_entry(
        &mut self,
        entry: &JournalEntry,
        lines: &[JournalLine],
    ) -> FinanceResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(entry.id.clone(), entry.clone());
        self.lines.write().unwrap().extend_from_slice(lines);
        Ok(())
    }

    async fn find_entry_by_reference(
        &self,
        company_id: &str,
        reference: &str,
    ) -> FinanceResult<Option<JournalEntry>> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .values()
            .find(|e| e.company_id == company_id && e.reference.as_deref() == Some(reference))
            .cloned())
    }

    async fn lines_for_account(
        &self,
        company_id: &str,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> FinanceResult<Vec<(JournalEntry, JournalLine)>> {
        let entries = self.entries.read().unwrap();
        let lines = self.lines.read().unwrap();

        let mut rows: Vec<(JournalEntry, JournalLine)> = lines
            .iter()
            .filter(|line| line.account_id == account_id)
            .filter_map(|line| {
                let entry = entries.get(&line.journal_entry_id)?;
                if entry.company_id != company_id || entry.status != EntryStatus::Posted {
                    return None;
                }
                if let Some(start) = start_date {
                    if entry.date < start {
                        return None;
                    }
                }
                if let Some(end) = end_date {
                    if entry.date > end {
                        return None;
                    }
                }
                Some((entry.clone(), line.clone()))
            })
            .collect();

        rows.sort_by(|a, b| a.0.date.cmp(&b.0.date));
        Ok(rows)
    }

    async fn get_invoice(
        &self,
        company_id: &str,
        invoice_id: &str,
    ) -> FinanceResult<Option<Invoice>> {
        Ok(self
            .invoices
            .read()
            .unwrap()
            .get(invoice_id)
            .filter(|i| i.company_id == company_id)
            .cloned())
    }

    async fn list_invoices(&self, company_id: &str) -> FinanceResult<Vec<Invoice>> {
        let invoices = self.invoices.read().unwrap();
        let mut filtered: Vec<Invoice> = invoices
            .values()
            .filter(|i| i.company_id == company_id)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.invoice_number.cmp(&b.invoice_number));
        Ok(filtered)
    }

    async fn get_payment(
        &self,
        company_id: &str,
        payment_id: &str,
    ) -> FinanceResult<Option<Payment>> {
        Ok(self
            .payments
            .read()
            .unwrap()
            .get(payment_id)
            .filter(|p| p.company_id == company_id)
            .cloned())
    }

    async fn list_payments(&self, company_id: &str) -> FinanceResult<Vec<Payment>> {
        let payments = self.payments.read().unwrap();
        let mut filtered: Vec<Payment> = payments
            .values()
            .filter(|p| p.company_id == company_id)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(filtered)
    }

    async fn statutory_settings(
        &self,
        company_id: &str,
    ) -> FinanceResult<Option<StatutorySettings>> {
        Ok(self.statutory.read().unwrap().get(company_id).cloned())
    }
}
