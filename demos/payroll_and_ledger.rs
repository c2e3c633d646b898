//! End-to-end demo: compute a payroll breakdown, post an invoice and a
//! payment, and print the resulting reports.

use bigdecimal::BigDecimal;
use chrono::Utc;
use payops_core::{
    FinanceReports, FinanceService, FinanceResult, Invoice, MemoryStorage, Payment,
    PayrollCalculator, PayrollInput, StatutorySettings,
};

#[tokio::main]
async fn main() -> FinanceResult<()> {
    let company = "demo-co";
    let storage = MemoryStorage::new();
    let mut service = FinanceService::new(storage.clone());
    let reports = FinanceReports::new(storage.clone());

    // Payroll
    let input = PayrollInput {
        basic_salary: BigDecimal::from(20000),
        hra: BigDecimal::from(8000),
        conveyance: BigDecimal::from(1600),
        medical: BigDecimal::from(1250),
        lwp_days: 2,
        days_in_month: 30,
        ..PayrollInput::default()
    };
    let breakdown = PayrollCalculator::calculate(&input, &StatutorySettings::default());
    println!("Adjusted gross: {}", breakdown.earnings.gross);
    println!("Net payable:    {}", breakdown.net_payable);
    println!("Cost to company: {}", breakdown.cost_to_company);

    // Ledger
    service.ensure_default_accounts(company).await?;
    storage.insert_invoice(Invoice {
        id: "inv-1".to_string(),
        company_id: company.to_string(),
        invoice_number: "INV-001".to_string(),
        amount: BigDecimal::from(1000),
        tax: BigDecimal::from(180),
        total: BigDecimal::from(1180),
    });
    storage.insert_payment(Payment {
        id: "pay-1".to_string(),
        company_id: company.to_string(),
        invoice_id: Some("inv-1".to_string()),
        invoice_number: Some("INV-001".to_string()),
        amount: BigDecimal::from(1180),
        payment_date: Utc::now().date_naive(),
        transaction_id: Some("TXN-1".to_string()),
    });

    service.post_invoice_journal(company, "inv-1").await?;
    service.post_payment_journal(company, "pay-1", None).await?;

    println!("\nTrial balance:");
    for row in service.get_trial_balance(company).await? {
        println!(
            "  {} {:<22} debit {:>8} credit {:>8}",
            row.code, row.name, row.debit_total, row.credit_total
        );
    }

    let sheet = reports
        .balance_sheet(company, Utc::now().date_naive())
        .await?;
    println!("\nBalance sheet check (should be 0): {}", sheet.check);

    Ok(())
}
