//! Read-only financial reporting over the ledger store
//!
//! The report layer never mutates anything and trusts the write-path
//! balance invariant; it does not re-validate individual entries.

use bigdecimal::BigDecimal;
use chrono::{Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::chart::BANK_CODE;
use crate::ledger::service::FinanceService;
use crate::traits::FinanceStorage;
use crate::types::*;

/// Balance of one account inside a report section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAccountBalance {
    pub id: String,
    pub code: String,
    pub name: String,
    pub balance: BigDecimal,
}

/// One section of a statement: per-account balances plus their total.
/// Zero-balance accounts are omitted from the list but still counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub total: BigDecimal,
    pub accounts: Vec<ReportAccountBalance>,
}

impl ReportSection {
    fn new() -> Self {
        Self {
            total: BigDecimal::from(0),
            accounts: Vec::new(),
        }
    }

    fn add(&mut self, account: &Account, balance: BigDecimal) {
        self.total += &balance;
        if balance != BigDecimal::from(0) {
            self.accounts.push(ReportAccountBalance {
                id: account.id.clone(),
                code: account.code.clone(),
                name: account.name.clone(),
                balance,
            });
        }
    }
}

/// Profit & Loss statement for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    pub revenue: ReportSection,
    pub expense: ReportSection,
    pub net_profit: BigDecimal,
}

/// Balance sheet as of a cutoff date.
///
/// `check` must equal zero for any ledger built purely through
/// `create_journal_entry`: assets = liabilities + equity, with retained
/// earnings folded into equity synthetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub as_of_date: NaiveDate,
    pub assets: ReportSection,
    pub liabilities: ReportSection,
    pub equity: ReportSection,
    pub check: BigDecimal,
}

/// One trailing month of P&L plus point-in-time cash balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetric {
    /// Short month label, e.g. "Jan"
    pub month: String,
    pub inflow: BigDecimal,
    pub outflow: BigDecimal,
    pub net_cash: BigDecimal,
    pub balance: BigDecimal,
    pub is_future: bool,
}

/// Aggregation layer over the ledger store. Depends only on the ledger's
/// data shape, via the same storage abstraction.
pub struct FinanceReports<S: FinanceStorage> {
    service: FinanceService<S>,
}

impl<S: FinanceStorage> FinanceReports<S> {
    pub fn new(storage: S) -> Self {
        Self {
            service: FinanceService::new(storage),
        }
    }

    /// Profit & Loss: revenue accounts credit-normal, expense accounts
    /// debit-normal, over posted lines whose entry date falls in range.
    pub async fn profit_and_loss(
        &self,
        company_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> FinanceResult<ProfitAndLoss> {
        let accounts = self.service.storage.list_accounts(company_id, None).await?;

        let mut revenue = ReportSection::new();
        let mut expense = ReportSection::new();

        for account in &accounts {
            if !matches!(
                account.account_type,
                AccountType::Revenue | AccountType::Expense
            ) {
                continue;
            }

            let (debit, credit) = self
                .account_movement(company_id, &account.id, Some(start_date), Some(end_date))
                .await?;

            if account.account_type == AccountType::Revenue {
                revenue.add(account, credit - debit);
            } else {
                expense.add(account, debit - credit);
            }
        }

        let net_profit = &revenue.total - &expense.total;
        Ok(ProfitAndLoss {
            revenue,
            expense,
            net_profit,
        })
    }

    /// Balance sheet as of a cutoff. Retained earnings are computed on the
    /// fly as cumulative revenue minus expense across all time up to the
    /// cutoff; there is no period-closing state machine.
    pub async fn balance_sheet(
        &self,
        company_id: &str,
        as_of_date: NaiveDate,
    ) -> FinanceResult<BalanceSheet> {
        let accounts = self.service.storage.list_accounts(company_id, None).await?;

        let mut assets = ReportSection::new();
        let mut liabilities = ReportSection::new();
        let mut equity = ReportSection::new();
        let mut retained_earnings = BigDecimal::from(0);

        for account in &accounts {
            let (debit, credit) = self
                .account_movement(company_id, &account.id, None, Some(as_of_date))
                .await?;

            match account.account_type {
                AccountType::Asset => assets.add(account, debit - credit),
                AccountType::Liability => liabilities.add(account, credit - debit),
                AccountType::Equity => equity.add(account, credit - debit),
                AccountType::Revenue => retained_earnings += credit - debit,
                AccountType::Expense => retained_earnings -= debit - credit,
            }
        }

        equity.total += &retained_earnings;
        equity.accounts.push(ReportAccountBalance {
            id: "retained-earnings".to_string(),
            code: "3999".to_string(),
            name: "Retained Earnings (Calculated)".to_string(),
            balance: retained_earnings,
        });

        let check = &assets.total - (&liabilities.total + &equity.total);
        Ok(BalanceSheet {
            as_of_date,
            assets,
            liabilities,
            equity,
            check,
        })
    }

    /// Metrics for each of the trailing `months` months: that month's P&L
    /// plus the closing bank balance. Recomputes from the full ledger per
    /// month; O(months) scans, not incrementally cached.
    pub async fn monthly_metrics(
        &self,
        company_id: &str,
        months: u32,
    ) -> FinanceResult<Vec<MonthlyMetric>> {
        let bank = self
            .service
            .storage
            .find_account_by_code(company_id, BANK_CODE)
            .await?;

        let today = Utc::now().date_naive();
        let mut result = Vec::new();

        for back in (0..months).rev() {
            let Some((month_start, month_end)) = month_window(today, back) else {
                continue;
            };

            let pnl = self
                .profit_and_loss(company_id, month_start, month_end)
                .await?;

            let balance = match &bank {
                Some(bank) => {
                    let ledger = self
                        .service
                        .get_account_ledger(company_id, &bank.id, None, Some(month_end))
                        .await?;
                    ledger
                        .iter()
                        .map(|line| &line.debit - &line.credit)
                        .sum()
                }
                None => BigDecimal::from(0),
            };

            result.push(MonthlyMetric {
                month: month_start.format("%b").to_string(),
                inflow: pnl.revenue.total,
                outflow: pnl.expense.total,
                net_cash: pnl.net_profit,
                balance,
                is_future: false,
            });
        }

        Ok(result)
    }

    async fn account_movement(
        &self,
        company_id: &str,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> FinanceResult<(BigDecimal, BigDecimal)> {
        let rows = self
            .service
            .storage
            .lines_for_account(company_id, account_id, start_date, end_date)
            .await?;

        let debit = rows.iter().map(|(_, l)| l.debit.clone()).sum();
        let credit = rows.iter().map(|(_, l)| l.credit.clone()).sum();
        Ok((debit, credit))
    }
}

/// First and last day of the month `back` months before `today`'s month
fn month_window(today: NaiveDate, back: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = today
        .with_day(1)?
        .checked_sub_months(Months::new(back))?;
    let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((start, end))
}
