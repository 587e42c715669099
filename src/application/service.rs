use crate::domain::allocator::allocate;
use crate::domain::debt::{Amount, Debt};
use crate::domain::plan::{AllocationPlan, PaymentRecord};
use crate::domain::ports::{DebtStoreBox, PaymentLedgerBox};
use crate::domain::request::{AllocationMode, AllocationRequest};
use crate::error::{Result, SettlementError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Who is paying, and how the resulting rows should be labelled.
#[derive(Debug, Clone)]
pub struct SubmissionDetails {
    pub payer: String,
    pub date: String,
    pub remark: Option<String>,
}

/// The entry point for settlement requests.
///
/// `SettlementService` owns the storage ports and ensures sequential
/// consistency by awaiting each storage operation. Client-supplied balances
/// are never trusted: every preview and submission re-fetches the current
/// balance of each referenced debt from the store.
pub struct SettlementService {
    debts: DebtStoreBox,
    ledger: PaymentLedgerBox,
}

impl SettlementService {
    pub fn new(debts: DebtStoreBox, ledger: PaymentLedgerBox) -> Self {
        Self { debts, ledger }
    }

    async fn build_request(
        &self,
        amount: Amount,
        debt_ids: &[u64],
        overrides: HashMap<u64, Decimal>,
        mode: AllocationMode,
    ) -> Result<AllocationRequest> {
        let mut queue = Vec::with_capacity(debt_ids.len());
        for &debt_id in debt_ids {
            let debt = self
                .debts
                .get(debt_id)
                .await?
                .ok_or(SettlementError::UnknownDebt(debt_id))?;
            queue.push(debt);
        }
        Ok(match mode {
            AllocationMode::Sequential => AllocationRequest::sequential(amount, queue),
            AllocationMode::Priority => AllocationRequest::priority(amount, queue, overrides),
        })
    }

    /// Computes an advisory plan against current stored balances.
    ///
    /// The plan may show `leftover > 0` even when the payment exceeds the net
    /// outstanding total; only `submit` refuses that case.
    pub async fn preview(
        &self,
        amount: Amount,
        debt_ids: &[u64],
        overrides: HashMap<u64, Decimal>,
        mode: AllocationMode,
    ) -> Result<AllocationPlan> {
        let request = self.build_request(amount, debt_ids, overrides, mode).await?;
        Ok(allocate(&request)?)
    }

    /// Recomputes the plan and commits it: one compare-and-set balance update
    /// plus one ledger row per effective line, in submission order (credits
    /// first, then funded positives).
    ///
    /// Refuses with `OverPayment` when the amount exceeds the net outstanding
    /// total. A `BalanceConflict` aborts without retry; the caller re-fetches
    /// debts, recomputes, and resubmits.
    pub async fn submit(
        &self,
        amount: Amount,
        debt_ids: &[u64],
        overrides: HashMap<u64, Decimal>,
        mode: AllocationMode,
        details: SubmissionDetails,
    ) -> Result<AllocationPlan> {
        let request = self.build_request(amount, debt_ids, overrides, mode).await?;
        if !request.is_payment_valid() {
            return Err(SettlementError::OverPayment {
                requested: amount.value(),
                outstanding: request.net_outstanding(),
            });
        }

        let plan = allocate(&request)?;
        for line in plan.submission_lines() {
            self.debts
                .settle(line.debt_id, line.balance_before, line.balance_after)
                .await?;
            self.ledger
                .record(PaymentRecord {
                    debt_id: line.debt_id,
                    amount: line.amount_applied,
                    payer: details.payer.clone(),
                    date: details.date.clone(),
                    remark: details.remark.clone(),
                })
                .await?;
        }
        Ok(plan)
    }

    /// Current non-zero debts, for building a queue.
    pub async fn outstanding_debts(&self) -> Result<Vec<Debt>> {
        self.debts.outstanding().await
    }
}
