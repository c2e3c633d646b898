//! Gross-to-net payroll computation honoring Indian statutory rules
//! (PF, ESIC, professional tax) with loss-of-pay proration.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::payroll::types::*;
use crate::traits::FinanceStorage;
use crate::types::FinanceResult;

/// Deterministic payroll calculation engine.
///
/// [`PayrollCalculator::calculate`] is a pure function: no I/O, no side
/// effects, safe to call concurrently without coordination.
pub struct PayrollCalculator;

impl PayrollCalculator {
    /// Load a company's statutory configuration, falling back to the
    /// standard defaults when none has been set up.
    pub async fn statutory_config<S: FinanceStorage>(
        storage: &S,
        company_id: &str,
    ) -> FinanceResult<StatutorySettings> {
        Ok(storage
            .statutory_settings(company_id)
            .await?
            .unwrap_or_default())
    }

    /// Convert raw compensation components into a fully itemized breakdown.
    ///
    /// Caller contract: `days_in_month > 0` and all monetary inputs
    /// non-negative. A zero `days_in_month` with `lwp_days > 0` divides by
    /// zero; only a zero gross is guarded internally.
    pub fn calculate(input: &PayrollInput, config: &StatutorySettings) -> PayrollBreakdown {
        let zero = BigDecimal::from(0);
        let hundred = BigDecimal::from(100);

        // Gross fixed earnings before any adjustment
        let gross_fixed = &input.basic_salary
            + &input.hra
            + &input.conveyance
            + &input.medical
            + &input.special_allowance
            + &input.other_allowances
            + &input.statutory_bonus;

        // Loss of pay, pro-rated over calendar days. Division last so the
        // deduction is exact whenever the product divides evenly.
        let lwp_deduction = if input.lwp_days > 0 {
            (&gross_fixed * BigDecimal::from(input.lwp_days))
                / BigDecimal::from(input.days_in_month)
        } else {
            zero.clone()
        };

        // A single global proration ratio scales every earnings component
        // and every perk alike; perks are treated as fungible with fixed
        // pay for attendance purposes. (gross - lwp) / gross reduces to
        // (days - lwp) / days, which stays exact at the endpoints.
        let ratio = if gross_fixed > zero {
            BigDecimal::from(input.days_in_month.saturating_sub(input.lwp_days))
                / BigDecimal::from(input.days_in_month)
        } else {
            zero.clone()
        };

        let adj_basic = &input.basic_salary * &ratio;
        let adj_hra = &input.hra * &ratio;
        let adj_conveyance = &input.conveyance * &ratio;
        let adj_medical = &input.medical * &ratio;
        let adj_special = &input.special_allowance * &ratio;
        let adj_others = &input.other_allowances * &ratio;
        let adj_bonus = &input.statutory_bonus * &ratio;
        let adjusted_gross = &adj_basic
            + &adj_hra
            + &adj_conveyance
            + &adj_medical
            + &adj_special
            + &adj_others
            + &adj_bonus;

        let adj_health = &input.health_care * &ratio;
        let adj_travelling = &input.travelling * &ratio;
        let adj_mobile = &input.mobile * &ratio;
        let adj_internet = &input.internet * &ratio;
        let adj_books = &input.books_and_periodicals * &ratio;
        let total_perks = &adj_health + &adj_travelling + &adj_mobile + &adj_internet + &adj_books;

        // PF on adjusted basic, capped at the wage ceiling
        let pf_basis = adj_basic.clone().min(config.pf_ceiling_amount.clone());
        let pf_employee = (&pf_basis * &config.pf_employee_rate) / &hundred;
        let pf_employer = (&pf_basis * &config.pf_employer_rate) / &hundred;

        // ESIC is a cliff, not a taper: it applies in full at the limit and
        // not at all above it. Each share is rounded up to a whole unit.
        let (esic_employee, esic_employer) = if adjusted_gross <= config.esic_limit_amount {
            (
                ((&adjusted_gross * &config.esic_employee_rate) / &hundred)
                    .with_scale_round(0, RoundingMode::Ceiling),
                ((&adjusted_gross * &config.esic_employer_rate) / &hundred)
                    .with_scale_round(0, RoundingMode::Ceiling),
            )
        } else {
            (zero.clone(), zero.clone())
        };

        // Professional tax slab (Maharashtra-style)
        let professional_tax = if config.pt_enabled {
            if adjusted_gross > BigDecimal::from(10000) {
                BigDecimal::from(200)
            } else if adjusted_gross > BigDecimal::from(7500) {
                BigDecimal::from(175)
            } else {
                zero.clone()
            }
        } else {
            zero.clone()
        };

        // TDS is a placeholder, always zero
        let tds = zero.clone();

        let total_deductions = &pf_employee + &esic_employee + &professional_tax + &tds;

        let net_payable = (&adjusted_gross - &total_deductions)
            + &input.arrears
            + &input.expenses
            + &total_perks;

        let cost_to_company = &adjusted_gross
            + &pf_employer
            + &esic_employer
            + &input.gratuity
            + &total_perks
            + &input.arrears
            + &input.expenses;

        PayrollBreakdown {
            earnings: Earnings {
                basic: adj_basic,
                hra: adj_hra,
                conveyance: adj_conveyance,
                medical: adj_medical,
                special_allowance: adj_special,
                other_allowances: adj_others,
                statutory_bonus: adj_bonus,
                gross: adjusted_gross,
            },
            deductions: Deductions {
                pf_employee,
                esic_employee,
                professional_tax,
                lwp_deduction,
                tds,
                total: total_deductions,
            },
            employer_contribution: EmployerContribution {
                pf_employer,
                esic_employer,
                gratuity: input.gratuity.clone(),
            },
            perks: Perks {
                health_care: adj_health,
                travelling: adj_travelling,
                mobile: adj_mobile,
                internet: adj_internet,
                books_and_periodicals: adj_books,
                total: total_perks,
            },
            salary_fixed: input.salary_fixed.clone(),
            salary_variable: input.salary_variable.clone(),
            salary_incentive: input.salary_incentive.clone(),
            arrears: input.arrears.clone(),
            expenses: input.expenses.clone(),
            net_payable,
            cost_to_company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn standard_input() -> PayrollInput {
        PayrollInput {
            basic_salary: BigDecimal::from(20000),
            hra: BigDecimal::from(8000),
            conveyance: BigDecimal::from(1600),
            medical: BigDecimal::from(1250),
            lwp_days: 0,
            days_in_month: 30,
            ..PayrollInput::default()
        }
    }

    #[test]
    fn standard_breakdown() {
        let breakdown =
            PayrollCalculator::calculate(&standard_input(), &StatutorySettings::default());

        assert_eq!(breakdown.earnings.gross, BigDecimal::from(30850));
        // PF on min(20000, 15000) at 12%
        assert_eq!(breakdown.deductions.pf_employee, BigDecimal::from(1800));
        // Gross above the ESIC limit, no ESIC
        assert_eq!(breakdown.deductions.esic_employee, BigDecimal::from(0));
        assert_eq!(breakdown.deductions.professional_tax, BigDecimal::from(200));
        assert_eq!(breakdown.net_payable, BigDecimal::from(28850));
        // CTC adds the employer PF share on top of gross
        assert_eq!(breakdown.cost_to_company, BigDecimal::from(32650));
    }

    #[test]
    fn no_lwp_keeps_gross_intact() {
        let mut input = standard_input();
        input.lwp_days = 0;
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        assert_eq!(breakdown.earnings.gross, BigDecimal::from(30850));
        assert_eq!(breakdown.deductions.lwp_deduction, BigDecimal::from(0));
    }

    #[test]
    fn full_month_lwp_zeroes_everything() {
        let mut input = standard_input();
        input.lwp_days = 30;
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        assert_eq!(breakdown.earnings.gross, BigDecimal::from(0));
        assert_eq!(breakdown.net_payable, BigDecimal::from(0));
        assert_eq!(breakdown.deductions.pf_employee, BigDecimal::from(0));
    }

    #[test]
    fn half_month_lwp_scales_perks_too() {
        let mut input = standard_input();
        input.lwp_days = 15;
        input.mobile = BigDecimal::from(1000);
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        assert_eq!(breakdown.earnings.gross, BigDecimal::from(15425));
        assert_eq!(breakdown.perks.mobile, BigDecimal::from(500));
        assert_eq!(breakdown.perks.total, BigDecimal::from(500));
    }

    #[test]
    fn pf_is_capped_at_ceiling() {
        let mut input = standard_input();
        input.basic_salary = BigDecimal::from(90000);
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        // Ceiling 15000 at 12% regardless of how much larger basic is
        assert_eq!(breakdown.deductions.pf_employee, BigDecimal::from(1800));
        assert_eq!(
            breakdown.employer_contribution.pf_employer,
            BigDecimal::from(1800)
        );
    }

    #[test]
    fn esic_applies_exactly_at_limit() {
        let input = PayrollInput {
            basic_salary: BigDecimal::from(21000),
            lwp_days: 0,
            days_in_month: 30,
            ..PayrollInput::default()
        };
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        // ceil(21000 * 0.75%) = ceil(157.5)
        assert_eq!(breakdown.deductions.esic_employee, BigDecimal::from(158));
        // ceil(21000 * 3.25%) = ceil(682.5)
        assert_eq!(
            breakdown.employer_contribution.esic_employer,
            BigDecimal::from(683)
        );
    }

    #[test]
    fn esic_cliff_just_above_limit() {
        let input = PayrollInput {
            basic_salary: dec("21000.01"),
            lwp_days: 0,
            days_in_month: 30,
            ..PayrollInput::default()
        };
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        assert_eq!(breakdown.deductions.esic_employee, BigDecimal::from(0));
        assert_eq!(
            breakdown.employer_contribution.esic_employer,
            BigDecimal::from(0)
        );
    }

    #[test]
    fn professional_tax_slabs() {
        let config = StatutorySettings::default();

        let mid = PayrollInput {
            basic_salary: BigDecimal::from(8000),
            lwp_days: 0,
            days_in_month: 30,
            ..PayrollInput::default()
        };
        let breakdown = PayrollCalculator::calculate(&mid, &config);
        assert_eq!(breakdown.deductions.professional_tax, BigDecimal::from(175));

        let low = PayrollInput {
            basic_salary: BigDecimal::from(7000),
            lwp_days: 0,
            days_in_month: 30,
            ..PayrollInput::default()
        };
        let breakdown = PayrollCalculator::calculate(&low, &config);
        assert_eq!(breakdown.deductions.professional_tax, BigDecimal::from(0));

        let disabled = StatutorySettings {
            pt_enabled: false,
            ..StatutorySettings::default()
        };
        let breakdown = PayrollCalculator::calculate(&standard_input(), &disabled);
        assert_eq!(breakdown.deductions.professional_tax, BigDecimal::from(0));
    }

    #[test]
    fn net_payable_invariant_holds() {
        let mut input = standard_input();
        input.arrears = BigDecimal::from(500);
        input.expenses = BigDecimal::from(250);
        input.internet = BigDecimal::from(600);
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());

        let expected = &breakdown.earnings.gross - &breakdown.deductions.total
            + &breakdown.arrears
            + &breakdown.expenses
            + &breakdown.perks.total;
        assert_eq!(breakdown.net_payable, expected);
    }

    #[test]
    fn ctc_never_below_net_payable() {
        let cases = [
            standard_input(),
            PayrollInput {
                basic_salary: BigDecimal::from(10000),
                hra: BigDecimal::from(5000),
                gratuity: BigDecimal::from(400),
                lwp_days: 3,
                days_in_month: 31,
                ..PayrollInput::default()
            },
            PayrollInput {
                basic_salary: dec("18000.50"),
                arrears: BigDecimal::from(1200),
                lwp_days: 0,
                days_in_month: 28,
                ..PayrollInput::default()
            },
        ];
        for input in cases {
            let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
            assert!(
                breakdown.cost_to_company >= breakdown.net_payable,
                "ctc {} < net {}",
                breakdown.cost_to_company,
                breakdown.net_payable
            );
        }
    }

    #[test]
    fn zero_gross_does_not_divide_by_zero() {
        let input = PayrollInput {
            lwp_days: 2,
            days_in_month: 30,
            expenses: BigDecimal::from(300),
            ..PayrollInput::default()
        };
        let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
        assert_eq!(breakdown.earnings.gross, BigDecimal::from(0));
        assert_eq!(breakdown.net_payable, BigDecimal::from(300));
    }
}
