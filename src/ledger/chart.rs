//! Starter chart of accounts used by the posting automation

use crate::types::AccountType;

/// Account codes the automation relies on
pub const BANK_CODE: &str = "1000";
pub const ACCOUNTS_RECEIVABLE_CODE: &str = "1200";
pub const ACCOUNTS_PAYABLE_CODE: &str = "2000";
pub const TAX_PAYABLE_CODE: &str = "2200";
pub const RETAINED_EARNINGS_CODE: &str = "3000";
pub const SALES_REVENUE_CODE: &str = "4000";
pub const COGS_CODE: &str = "5000";

/// One entry of the starter chart
#[derive(Debug, Clone, Copy)]
pub struct DefaultAccount {
    pub code: &'static str,
    pub name: &'static str,
    pub account_type: AccountType,
}

/// The fixed starter chart created idempotently per company.
/// Keyed by code; existing accounts are never touched.
pub const DEFAULT_ACCOUNTS: [DefaultAccount; 7] = [
    DefaultAccount {
        code: BANK_CODE,
        name: "Bank",
        account_type: AccountType::Asset,
    },
    DefaultAccount {
        code: ACCOUNTS_RECEIVABLE_CODE,
        name: "Accounts Receivable",
        account_type: AccountType::Asset,
    },
    DefaultAccount {
        code: ACCOUNTS_PAYABLE_CODE,
        name: "Accounts Payable",
        account_type: AccountType::Liability,
    },
    DefaultAccount {
        code: TAX_PAYABLE_CODE,
        name: "Tax Payable",
        account_type: AccountType::Liability,
    },
    DefaultAccount {
        code: RETAINED_EARNINGS_CODE,
        name: "Retained Earnings",
        account_type: AccountType::Equity,
    },
    DefaultAccount {
        code: SALES_REVENUE_CODE,
        name: "Sales Revenue",
        account_type: AccountType::Revenue,
    },
    DefaultAccount {
        code: COGS_CODE,
        name: "Cost of Goods Sold",
        account_type: AccountType::Expense,
    },
];
