//! One-time backfill of ledger entries from existing invoices and payments
//!
//! Intended for operator-supervised, single-threaded runs when the ledger
//! is introduced into an installation that already has billing history.

use serde::{Deserialize, Serialize};

use crate::ledger::service::FinanceService;
use crate::traits::FinanceStorage;
use crate::types::FinanceResult;

/// Aggregate outcome of a backfill run. Per-record failures are counted,
/// never raised; the operator inspects logs for completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillSummary {
    pub invoices_posted: u64,
    pub payments_posted: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Sequentially replays a company's invoices and payments into the ledger.
///
/// Invoices already posted (probed by invoice-number reference) are
/// skipped. Payment duplicate detection is best-effort: payments without a
/// transaction id share the `CASH` reference, so replaying those risks
/// duplicates; that is accepted for this utility rather than handled.
pub struct BackfillRunner<S: FinanceStorage> {
    service: FinanceService<S>,
}

impl<S: FinanceStorage> BackfillRunner<S> {
    pub fn new(storage: S) -> Self {
        Self {
            service: FinanceService::new(storage),
        }
    }

    /// Run the backfill for one company. A failure on one record is logged
    /// and the loop continues; only storage-level failures on the listing
    /// queries abort the run.
    pub async fn run(&mut self, company_id: &str) -> FinanceResult<BackfillSummary> {
        let mut summary = BackfillSummary::default();

        self.service.ensure_default_accounts(company_id).await?;

        let invoices = self.service.storage.list_invoices(company_id).await?;
        tracing::info!(
            company_id = %company_id,
            count = invoices.len(),
            "Backfilling invoices"
        );
        for invoice in invoices {
            if self
                .service
                .find_entry_by_reference(company_id, &invoice.invoice_number)
                .await?
                .is_some()
            {
                summary.skipped += 1;
                continue;
            }

            match self.service.post_invoice_journal(company_id, &invoice.id).await {
                Ok(_) => summary.invoices_posted += 1,
                Err(err) => {
                    tracing::warn!(
                        company_id = %company_id,
                        invoice_id = %invoice.id,
                        error = %err,
                        "Failed to post invoice, continuing"
                    );
                    summary.failed += 1;
                }
            }
        }

        let payments = self.service.storage.list_payments(company_id).await?;
        tracing::info!(
            company_id = %company_id,
            count = payments.len(),
            "Backfilling payments"
        );
        for payment in payments {
            // Best-effort duplicate check: only payments with a gateway
            // transaction id have a unique reference to probe.
            if let Some(transaction_id) = &payment.transaction_id {
                if self
                    .service
                    .find_entry_by_reference(company_id, transaction_id)
                    .await?
                    .is_some()
                {
                    summary.skipped += 1;
                    continue;
                }
            }

            match self
                .service
                .post_payment_journal(company_id, &payment.id, None)
                .await
            {
                Ok(_) => summary.payments_posted += 1,
                Err(err) => {
                    tracing::warn!(
                        company_id = %company_id,
                        payment_id = %payment.id,
                        error = %err,
                        "Failed to post payment, continuing"
                    );
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            company_id = %company_id,
            invoices_posted = summary.invoices_posted,
            payments_posted = summary.payments_posted,
            skipped = summary.skipped,
            failed = summary.failed,
            "Backfill complete"
        );

        Ok(summary)
    }
}
