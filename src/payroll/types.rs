//! Input and output types for the payroll calculator

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Per-company statutory payroll configuration.
///
/// Immutable per lookup; [`Default`] supplies the standard Indian SME rates
/// used whenever a company has no configuration of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutorySettings {
    /// Employee PF contribution rate, percent of basis
    pub pf_employee_rate: BigDecimal,
    /// Employer PF contribution rate, percent of basis
    pub pf_employer_rate: BigDecimal,
    /// PF wage ceiling: the basis is capped at this amount
    pub pf_ceiling_amount: BigDecimal,
    /// Employee ESIC rate, percent of adjusted gross
    pub esic_employee_rate: BigDecimal,
    /// Employer ESIC rate, percent of adjusted gross
    pub esic_employer_rate: BigDecimal,
    /// ESIC applies only when adjusted gross is at or below this limit
    pub esic_limit_amount: BigDecimal,
    /// Whether professional tax is levied
    pub pt_enabled: bool,
}

impl Default for StatutorySettings {
    fn default() -> Self {
        Self {
            pf_employee_rate: BigDecimal::from(12),
            pf_employer_rate: BigDecimal::from(12),
            pf_ceiling_amount: BigDecimal::from(15000),
            esic_employee_rate: BigDecimal::from(75) / BigDecimal::from(100),
            esic_employer_rate: BigDecimal::from(325) / BigDecimal::from(100),
            esic_limit_amount: BigDecimal::from(21000),
            pt_enabled: true,
        }
    }
}

/// Raw compensation components for one employee for one pay period.
///
/// Constructed fresh for each calculation, never persisted as-is. Every
/// monetary field defaults to zero when missing from serialized input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollInput {
    pub basic_salary: BigDecimal,
    pub hra: BigDecimal,
    pub conveyance: BigDecimal,
    pub medical: BigDecimal,
    pub special_allowance: BigDecimal,
    pub other_allowances: BigDecimal,
    pub statutory_bonus: BigDecimal,
    pub gratuity: BigDecimal,
    /// Loss-of-pay days in the period
    pub lwp_days: u32,
    /// Calendar days in the month. Must be greater than zero; the
    /// calculator does not guard against a zero value.
    pub days_in_month: u32,
    pub arrears: BigDecimal,
    pub expenses: BigDecimal,
    pub health_care: BigDecimal,
    pub travelling: BigDecimal,
    pub mobile: BigDecimal,
    pub internet: BigDecimal,
    pub books_and_periodicals: BigDecimal,
    pub salary_fixed: BigDecimal,
    pub salary_variable: BigDecimal,
    pub salary_incentive: BigDecimal,
}

/// Itemized earnings after loss-of-pay proration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earnings {
    pub basic: BigDecimal,
    pub hra: BigDecimal,
    pub conveyance: BigDecimal,
    pub medical: BigDecimal,
    pub special_allowance: BigDecimal,
    pub other_allowances: BigDecimal,
    pub statutory_bonus: BigDecimal,
    /// Sum of all adjusted earnings components
    pub gross: BigDecimal,
}

/// Employee-side deductions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub pf_employee: BigDecimal,
    pub esic_employee: BigDecimal,
    pub professional_tax: BigDecimal,
    /// Informational: the loss-of-pay amount already reflected in the
    /// adjusted earnings, not part of `total`
    pub lwp_deduction: BigDecimal,
    /// Always zero; TDS is not modeled
    pub tds: BigDecimal,
    pub total: BigDecimal,
}

/// Employer-side contributions on top of gross pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerContribution {
    pub pf_employer: BigDecimal,
    pub esic_employer: BigDecimal,
    pub gratuity: BigDecimal,
}

/// Named perks after proration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perks {
    pub health_care: BigDecimal,
    pub travelling: BigDecimal,
    pub mobile: BigDecimal,
    pub internet: BigDecimal,
    pub books_and_periodicals: BigDecimal,
    pub total: BigDecimal,
}

/// Full pay breakdown for one employee for one period.
///
/// Invariants:
/// `net_payable = earnings.gross - deductions.total + arrears + expenses + perks.total`
/// `cost_to_company = earnings.gross + pf_employer + esic_employer + gratuity + perks.total + arrears + expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    pub earnings: Earnings,
    pub deductions: Deductions,
    pub employer_contribution: EmployerContribution,
    pub perks: Perks,
    /// Echo of the salary structure split, unscaled
    pub salary_fixed: BigDecimal,
    pub salary_variable: BigDecimal,
    pub salary_incentive: BigDecimal,
    pub arrears: BigDecimal,
    pub expenses: BigDecimal,
    pub net_payable: BigDecimal,
    pub cost_to_company: BigDecimal,
}
