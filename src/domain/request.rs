use super::debt::{Amount, Debt};
use crate::error::InvalidRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How the allocation engine walks the debt queue.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Batch flow: debts are funded strictly in queue order. Credits get
    /// nothing and manual overrides are ignored.
    Sequential,
    /// Selective flow: credits are cleared first and unconditionally, then
    /// positive debts are funded in queue order, honoring manual overrides.
    Priority,
}

/// A single allocation question: how should `amount` be spread over `queue`?
///
/// The queue order is caller-determined (by date, or manual reordering) and is
/// significant; `overrides` caps the amount applied to individual
/// positive-balance debts and is only consulted in [`AllocationMode::Priority`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AllocationRequest {
    pub amount: Amount,
    pub queue: Vec<Debt>,
    pub overrides: HashMap<u64, Decimal>,
    pub mode: AllocationMode,
}

impl AllocationRequest {
    /// Builds a batch-flow request. Overrides do not apply in this mode.
    pub fn sequential(amount: Amount, queue: Vec<Debt>) -> Self {
        Self {
            amount,
            queue,
            overrides: HashMap::new(),
            mode: AllocationMode::Sequential,
        }
    }

    /// Builds a selective-flow request with optional per-debt caps.
    pub fn priority(amount: Amount, queue: Vec<Debt>, overrides: HashMap<u64, Decimal>) -> Self {
        Self {
            amount,
            queue,
            overrides,
            mode: AllocationMode::Priority,
        }
    }

    /// Checks every allocation precondition, returning the first violation.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.queue.is_empty() {
            return Err(InvalidRequest::EmptyQueue);
        }

        let mut seen = HashSet::with_capacity(self.queue.len());
        for debt in &self.queue {
            if !seen.insert(debt.id) {
                return Err(InvalidRequest::DuplicateDebt(debt.id));
            }
            if debt.balance.is_zero() {
                return Err(InvalidRequest::ZeroBalanceDebt(debt.id));
            }
        }

        if self.mode == AllocationMode::Priority {
            for (&debt_id, &value) in &self.overrides {
                let Some(debt) = self.queue.iter().find(|d| d.id == debt_id) else {
                    return Err(InvalidRequest::OverrideUnknownDebt(debt_id));
                };
                if debt.is_credit() {
                    return Err(InvalidRequest::OverrideOnCredit(debt_id));
                }
                if value < Decimal::ZERO {
                    return Err(InvalidRequest::NegativeOverride(debt_id));
                }
            }
        }

        Ok(())
    }

    /// Net outstanding total over the queue. Credits net against positive
    /// debts, so this can be smaller than the sum of positive balances.
    pub fn net_outstanding(&self) -> Decimal {
        self.queue.iter().map(|d| d.balance.value()).sum()
    }

    /// The caller-facing "can I submit?" gate: the payment must not exceed
    /// the net outstanding total. The engine still computes a plan when this
    /// is false; refusing submission is the caller's duty.
    pub fn is_payment_valid(&self) -> bool {
        self.amount.value() <= self.net_outstanding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amount(v: Decimal) -> Amount {
        Amount::new(v).unwrap()
    }

    #[test]
    fn test_empty_queue_rejected() {
        let request = AllocationRequest::sequential(amount(dec!(10)), vec![]);
        assert_eq!(request.validate(), Err(InvalidRequest::EmptyQueue));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let request = AllocationRequest::sequential(
            amount(dec!(10)),
            vec![Debt::new(1, dec!(5)), Debt::new(1, dec!(7))],
        );
        assert_eq!(request.validate(), Err(InvalidRequest::DuplicateDebt(1)));
    }

    #[test]
    fn test_zero_balance_rejected() {
        let request = AllocationRequest::sequential(
            amount(dec!(10)),
            vec![Debt::new(1, dec!(5)), Debt::new(2, dec!(0))],
        );
        assert_eq!(request.validate(), Err(InvalidRequest::ZeroBalanceDebt(2)));
    }

    #[test]
    fn test_override_must_reference_positive_debt_in_queue() {
        let queue = vec![Debt::new(1, dec!(-5)), Debt::new(2, dec!(50))];

        let unknown = AllocationRequest::priority(
            amount(dec!(10)),
            queue.clone(),
            HashMap::from([(9, dec!(1))]),
        );
        assert_eq!(
            unknown.validate(),
            Err(InvalidRequest::OverrideUnknownDebt(9))
        );

        let on_credit = AllocationRequest::priority(
            amount(dec!(10)),
            queue.clone(),
            HashMap::from([(1, dec!(1))]),
        );
        assert_eq!(on_credit.validate(), Err(InvalidRequest::OverrideOnCredit(1)));

        let negative =
            AllocationRequest::priority(amount(dec!(10)), queue, HashMap::from([(2, dec!(-1))]));
        assert_eq!(
            negative.validate(),
            Err(InvalidRequest::NegativeOverride(2))
        );
    }

    #[test]
    fn test_net_outstanding_nets_credits() {
        let request = AllocationRequest::priority(
            amount(dec!(40)),
            vec![Debt::new(1, dec!(-50)), Debt::new(2, dec!(100))],
            HashMap::new(),
        );
        assert_eq!(request.net_outstanding(), dec!(50));
        assert!(request.is_payment_valid());

        let over = AllocationRequest::priority(
            amount(dec!(60)),
            vec![Debt::new(1, dec!(-50)), Debt::new(2, dec!(100))],
            HashMap::new(),
        );
        assert!(!over.is_payment_valid());
    }
}
