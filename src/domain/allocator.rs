use super::debt::Balance;
use super::plan::{AllocationLine, AllocationPlan};
use super::request::{AllocationMode, AllocationRequest};
use crate::error::InvalidRequest;
use rust_decimal::Decimal;

/// Decides how a cash amount is spread over an ordered debt queue.
///
/// This is a pure function: no clock, no randomness, no I/O. Identical
/// requests always produce identical plans, and nothing is persisted here;
/// the caller submits the resulting plan to storage separately.
///
/// In priority mode the pool is first grown by unconditionally clearing every
/// credit (negative balance), then drained over the positive debts in queue
/// order. In sequential mode credits are skipped and the pool is drained over
/// the queue as-is, ignoring overrides.
pub fn allocate(request: &AllocationRequest) -> Result<AllocationPlan, InvalidRequest> {
    request.validate()?;

    let mut pool = request.amount.value();
    let mut applied = vec![Decimal::ZERO; request.queue.len()];

    if request.mode == AllocationMode::Priority {
        // Credit pass: always cleared in full, regardless of available funds.
        // Subtracting a negative balance grows the pool for the positive pass.
        for (slot, debt) in applied.iter_mut().zip(&request.queue) {
            if debt.is_credit() {
                *slot = debt.balance.value();
                pool -= *slot;
            }
        }
    }

    for (slot, debt) in applied.iter_mut().zip(&request.queue) {
        if debt.is_credit() || pool <= Decimal::ZERO {
            // Credits were handled above (or get nothing in sequential mode);
            // an exhausted pool still leaves the zero line visible in the plan.
            continue;
        }
        let cap = pool.min(debt.balance.value());
        *slot = match request.mode {
            AllocationMode::Priority => match request.overrides.get(&debt.id) {
                Some(v) => cap.min(*v),
                None => cap,
            },
            AllocationMode::Sequential => cap,
        };
        pool -= *slot;
    }

    let lines = request
        .queue
        .iter()
        .zip(&applied)
        .map(|(debt, &amount)| AllocationLine {
            debt_id: debt.id,
            balance_before: debt.balance,
            amount_applied: Balance::new(amount),
            balance_after: Balance::new(debt.balance.value() - amount),
        })
        .collect();

    Ok(AllocationPlan {
        lines,
        total_applied: Balance::new(request.amount.value() - pool),
        leftover: Balance::new(pool),
    })
}
