//! Finance ledger service: the only write path into the journal

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::chart::*;
use crate::ledger::entry::NewJournalEntry;
use crate::traits::FinanceStorage;
use crate::types::*;

/// A ledger row for one account: a line joined with its parent entry,
/// shaped for presentation. Running balances are left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerLine {
    pub date: NaiveDate,
    pub entry_number: String,
    pub reference: Option<String>,
    pub description: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
}

/// Per-account totals for the trial balance. `net_balance` is always
/// debit-normal (debit minus credit); callers flip the sign when
/// displaying credit-normal account types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_id: String,
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub debit_total: BigDecimal,
    pub credit_total: BigDecimal,
    pub net_balance: BigDecimal,
}

/// Double-entry ledger service over an injected storage backend.
///
/// Every entry it creates is validated (balanced, non-empty) and persisted
/// atomically; there is no update path. Corrections require new offsetting
/// entries.
pub struct FinanceService<S: FinanceStorage> {
    pub(crate) storage: S,
}

impl<S: FinanceStorage> FinanceService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create a balanced double-entry journal entry.
    ///
    /// Validates that total debits equal total credits exactly and that the
    /// entry is non-empty, numbers the entry from the storage sequence, and
    /// persists header and lines as one atomic unit. Returns the header.
    pub async fn create_journal_entry(
        &mut self,
        company_id: &str,
        new_entry: NewJournalEntry,
    ) -> FinanceResult<JournalEntry> {
        new_entry.validate()?;

        let sequence = self.storage.next_entry_sequence(company_id).await?;
        let entry_number = format!("JE-{}-{:06}", Utc::now().year(), sequence);

        let entry = JournalEntry {
            id: uuid::Uuid::new_v4().to_string(),
            company_id: company_id.to_string(),
            entry_number: entry_number.clone(),
            date: new_entry.date,
            description: new_entry.description.clone(),
            reference: new_entry.reference.clone(),
            posted_by: new_entry.posted_by.clone(),
            status: EntryStatus::Posted,
        };

        let lines: Vec<JournalLine> = new_entry
            .lines
            .iter()
            .map(|line| JournalLine {
                id: uuid::Uuid::new_v4().to_string(),
                journal_entry_id: entry.id.clone(),
                account_id: line.account_id.clone(),
                description: line
                    .description
                    .clone()
                    .unwrap_or_else(|| new_entry.description.clone()),
                debit: line.debit_amount(),
                credit: line.credit_amount(),
            })
            .collect();

        self.storage.save_journal_entry(&entry, &lines).await?;

        tracing::info!(
            company_id = %company_id,
            entry_number = %entry_number,
            lines = lines.len(),
            "Journal entry posted"
        );

        Ok(entry)
    }

    /// Ledger for one account: posted lines only, ordered by entry date
    /// ascending, optionally restricted to a date range.
    pub async fn get_account_ledger(
        &self,
        company_id: &str,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> FinanceResult<Vec<LedgerLine>> {
        let rows = self
            .storage
            .lines_for_account(company_id, account_id, start_date, end_date)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(entry, line)| LedgerLine {
                date: entry.date,
                entry_number: entry.entry_number,
                reference: entry.reference,
                description: line.description,
                debit: line.debit,
                credit: line.credit,
            })
            .collect())
    }

    /// Trial balance: debit/credit totals of all posted lines per active
    /// account, sorted by account code.
    pub async fn get_trial_balance(&self, company_id: &str) -> FinanceResult<Vec<TrialBalanceRow>> {
        let accounts = self.storage.list_accounts(company_id, None).await?;

        let mut rows = Vec::new();
        for account in accounts.into_iter().filter(|a| a.is_active) {
            let lines = self
                .storage
                .lines_for_account(company_id, &account.id, None, None)
                .await?;

            let debit_total: BigDecimal = lines.iter().map(|(_, l)| l.debit.clone()).sum();
            let credit_total: BigDecimal = lines.iter().map(|(_, l)| l.credit.clone()).sum();
            let net_balance = &debit_total - &credit_total;

            rows.push(TrialBalanceRow {
                account_id: account.id,
                code: account.code,
                name: account.name,
                account_type: account.account_type,
                debit_total,
                credit_total,
                net_balance,
            });
        }

        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    /// Idempotently create the starter chart of accounts for a company.
    /// Existence is checked by code, so repeated calls never duplicate.
    pub async fn ensure_default_accounts(&mut self, company_id: &str) -> FinanceResult<()> {
        for default in DEFAULT_ACCOUNTS {
            let exists = self
                .storage
                .find_account_by_code(company_id, default.code)
                .await?
                .is_some();
            if !exists {
                let account = Account::new(
                    company_id.to_string(),
                    default.code.to_string(),
                    default.name.to_string(),
                    default.account_type,
                );
                self.storage.save_account(&account).await?;
                tracing::info!(
                    company_id = %company_id,
                    code = %default.code,
                    "Created default account"
                );
            }
        }
        Ok(())
    }

    /// Post an invoice to the ledger: debit AR for the total, credit
    /// revenue for the amount excluding tax, credit tax payable when tax is
    /// positive. Reference is the invoice number.
    ///
    /// No duplicate guard here; callers probe [`Self::find_entry_by_reference`]
    /// first when replaying.
    pub async fn post_invoice_journal(
        &mut self,
        company_id: &str,
        invoice_id: &str,
    ) -> FinanceResult<JournalEntry> {
        self.ensure_default_accounts(company_id).await?;

        let invoice = self
            .storage
            .get_invoice(company_id, invoice_id)
            .await?
            .ok_or_else(|| FinanceError::NotFound(format!("Invoice not found: {invoice_id}")))?;

        let ar = self.required_account(company_id, ACCOUNTS_RECEIVABLE_CODE).await?;
        let revenue = self.required_account(company_id, SALES_REVENUE_CODE).await?;
        let tax = self.required_account(company_id, TAX_PAYABLE_CODE).await?;

        let number = &invoice.invoice_number;
        let mut entry = NewJournalEntry::new(
            Utc::now().date_naive(),
            format!("Invoice Posting #{number}"),
        )
        .reference(number.clone())
        .debit(
            ar.id,
            invoice.total.clone(),
            Some(format!("Invoice #{number}")),
        )
        .credit(
            revenue.id,
            invoice.amount.clone(),
            Some(format!("Revenue - Inv #{number}")),
        );

        if invoice.tax > BigDecimal::from(0) {
            entry = entry.credit(
                tax.id,
                invoice.tax.clone(),
                Some(format!("Tax - Inv #{number}")),
            );
        }

        self.create_journal_entry(company_id, entry).await
    }

    /// Post a payment to the ledger: debit bank, credit AR.
    ///
    /// The reference is the explicit idempotency key when supplied,
    /// otherwise the gateway transaction id, otherwise the literal `CASH`.
    /// The `CASH` fallback is a weak key: multiple cash payments collide on
    /// it, so duplicate detection by reference alone is unreliable there.
    pub async fn post_payment_journal(
        &mut self,
        company_id: &str,
        payment_id: &str,
        idempotency_key: Option<&str>,
    ) -> FinanceResult<JournalEntry> {
        self.ensure_default_accounts(company_id).await?;

        let payment = self
            .storage
            .get_payment(company_id, payment_id)
            .await?
            .ok_or_else(|| FinanceError::NotFound(format!("Payment not found: {payment_id}")))?;

        let bank = self.required_account(company_id, BANK_CODE).await?;
        let ar = self.required_account(company_id, ACCOUNTS_RECEIVABLE_CODE).await?;

        let reference = idempotency_key
            .map(str::to_string)
            .or_else(|| payment.transaction_id.clone())
            .unwrap_or_else(|| "CASH".to_string());

        let description = match &payment.invoice_number {
            Some(number) => format!("Payment Received for #{number}"),
            None => "Payment Received".to_string(),
        };

        let entry = NewJournalEntry::new(payment.payment_date, description)
            .reference(reference)
            .debit(
                bank.id,
                payment.amount.clone(),
                Some("Bank Deposit".to_string()),
            )
            .credit(
                ar.id,
                payment.amount.clone(),
                Some("Payment applied to AR".to_string()),
            );

        self.create_journal_entry(company_id, entry).await
    }

    /// Duplicate probe used by the backfill runner
    pub async fn find_entry_by_reference(
        &self,
        company_id: &str,
        reference: &str,
    ) -> FinanceResult<Option<JournalEntry>> {
        self.storage.find_entry_by_reference(company_id, reference).await
    }

    async fn required_account(&self, company_id: &str, code: &str) -> FinanceResult<Account> {
        self.storage
            .find_account_by_code(company_id, code)
            .await?
            .ok_or_else(|| FinanceError::NotFound(format!("Default account missing: {code}")))
    }
}
