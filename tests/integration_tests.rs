//! Integration tests for payops-core

use bigdecimal::BigDecimal;
use chrono::Utc;
use payops_core::{
    BackfillRunner, FinanceReports, FinanceService, Invoice, MemoryStorage, NewJournalEntry,
    Payment, PayrollCalculator, PayrollInput, StatutorySettings,
};

const COMPANY: &str = "acme";

fn seed_billing(storage: &MemoryStorage) {
    storage.insert_invoice(Invoice {
        id: "inv-1".to_string(),
        company_id: COMPANY.to_string(),
        invoice_number: "INV-001".to_string(),
        amount: BigDecimal::from(1000),
        tax: BigDecimal::from(180),
        total: BigDecimal::from(1180),
    });
    storage.insert_payment(Payment {
        id: "pay-1".to_string(),
        company_id: COMPANY.to_string(),
        invoice_id: Some("inv-1".to_string()),
        invoice_number: Some("INV-001".to_string()),
        amount: BigDecimal::from(1180),
        payment_date: Utc::now().date_naive(),
        transaction_id: Some("TXN-1".to_string()),
    });
}

#[tokio::test]
async fn complete_finance_workflow() {
    let storage = MemoryStorage::new();
    let mut service = FinanceService::new(storage.clone());
    let reports = FinanceReports::new(storage.clone());

    service.ensure_default_accounts(COMPANY).await.unwrap();
    seed_billing(&storage);

    service
        .post_invoice_journal(COMPANY, "inv-1")
        .await
        .unwrap();
    service
        .post_payment_journal(COMPANY, "pay-1", None)
        .await
        .unwrap();

    // Trial balance stays balanced overall
    let rows = service.get_trial_balance(COMPANY).await.unwrap();
    let debits: BigDecimal = rows.iter().map(|r| r.debit_total.clone()).sum();
    let credits: BigDecimal = rows.iter().map(|r| r.credit_total.clone()).sum();
    assert_eq!(debits, credits);

    // Bank holds the cash, AR is drained
    let bank = rows.iter().find(|r| r.code == "1000").unwrap();
    assert_eq!(bank.net_balance, BigDecimal::from(1180));
    let ar = rows.iter().find(|r| r.code == "1200").unwrap();
    assert_eq!(ar.net_balance, BigDecimal::from(0));

    // Reports agree with the write path
    let today = Utc::now().date_naive();
    let sheet = reports.balance_sheet(COMPANY, today).await.unwrap();
    assert_eq!(sheet.check, BigDecimal::from(0));

    let pnl = reports
        .profit_and_loss(
            COMPANY,
            chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            today,
        )
        .await
        .unwrap();
    assert_eq!(pnl.net_profit, BigDecimal::from(1000));
}

#[tokio::test]
async fn backfill_is_safe_to_rerun() {
    let storage = MemoryStorage::new();
    seed_billing(&storage);

    let mut runner = BackfillRunner::new(storage.clone());
    let first = runner.run(COMPANY).await.unwrap();
    assert_eq!(first.invoices_posted, 1);
    assert_eq!(first.payments_posted, 1);
    assert_eq!(first.failed, 0);

    let second = runner.run(COMPANY).await.unwrap();
    assert_eq!(second.invoices_posted, 0);
    assert_eq!(second.payments_posted, 0);
    assert_eq!(second.skipped, 2);

    // The replay left the ledger consistent
    let reports = FinanceReports::new(storage);
    let sheet = reports
        .balance_sheet(COMPANY, Utc::now().date_naive())
        .await
        .unwrap();
    assert_eq!(sheet.check, BigDecimal::from(0));
}

#[tokio::test]
async fn payroll_feeds_a_salary_journal() {
    let storage = MemoryStorage::new();
    let mut service = FinanceService::new(storage.clone());
    service.ensure_default_accounts(COMPANY).await.unwrap();

    // No per-company statutory config seeded: defaults apply
    let config = PayrollCalculator::statutory_config(&storage, COMPANY)
        .await
        .unwrap();
    assert_eq!(config, StatutorySettings::default());

    let input = PayrollInput {
        basic_salary: BigDecimal::from(20000),
        hra: BigDecimal::from(8000),
        conveyance: BigDecimal::from(1600),
        medical: BigDecimal::from(1250),
        lwp_days: 0,
        days_in_month: 30,
        ..PayrollInput::default()
    };
    let breakdown = PayrollCalculator::calculate(&input, &config);
    assert_eq!(breakdown.net_payable, BigDecimal::from(28850));

    // Post the net salary out of the bank against COGS as a stand-in
    // expense account from the starter chart
    let rows = service.get_trial_balance(COMPANY).await.unwrap();
    let bank = rows.iter().find(|r| r.code == "1000").unwrap();
    let expense = rows.iter().find(|r| r.code == "5000").unwrap();

    let entry = service
        .create_journal_entry(
            COMPANY,
            NewJournalEntry::new(Utc::now().date_naive(), "Salary payout")
                .debit(
                    expense.account_id.clone(),
                    breakdown.net_payable.clone(),
                    None,
                )
                .credit(bank.account_id.clone(), breakdown.net_payable.clone(), None),
        )
        .await
        .unwrap();
    assert!(entry.entry_number.starts_with("JE-"));

    let rows = service.get_trial_balance(COMPANY).await.unwrap();
    let bank = rows.iter().find(|r| r.code == "1000").unwrap();
    assert_eq!(bank.net_balance, BigDecimal::from(-28850));
}

#[tokio::test]
async fn custom_statutory_settings_are_honored() {
    let storage = MemoryStorage::new();
    storage.insert_statutory_settings(
        COMPANY,
        StatutorySettings {
            pt_enabled: false,
            pf_ceiling_amount: BigDecimal::from(10000),
            ..StatutorySettings::default()
        },
    );

    let config = PayrollCalculator::statutory_config(&storage, COMPANY)
        .await
        .unwrap();
    assert!(!config.pt_enabled);

    let input = PayrollInput {
        basic_salary: BigDecimal::from(20000),
        hra: BigDecimal::from(8000),
        conveyance: BigDecimal::from(1600),
        medical: BigDecimal::from(1250),
        lwp_days: 0,
        days_in_month: 30,
        ..PayrollInput::default()
    };
    let breakdown = PayrollCalculator::calculate(&input, &config);
    assert_eq!(breakdown.deductions.professional_tax, BigDecimal::from(0));
    // PF capped at the lowered ceiling
    assert_eq!(breakdown.deductions.pf_employee, BigDecimal::from(1200));
}

#[tokio::test]
async fn breakdown_serializes_round_trip() {
    let breakdown = PayrollCalculator::calculate(
        &PayrollInput {
            basic_salary: BigDecimal::from(15000),
            lwp_days: 5,
            days_in_month: 30,
            ..PayrollInput::default()
        },
        &StatutorySettings::default(),
    );

    let json = serde_json::to_string(&breakdown).unwrap();
    let parsed: payops_core::PayrollBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, breakdown);
}
