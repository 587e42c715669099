use super::debt::Balance;
use serde::{Deserialize, Serialize};

/// The engine's decision for one queued debt.
///
/// Invariant: `balance_after = balance_before - amount_applied`. For a
/// positive debt `0 <= amount_applied <= balance_before`; for a credit
/// cleared by the priority pass `amount_applied = balance_before` (negative)
/// and `balance_after` is zero.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct AllocationLine {
    pub debt_id: u64,
    pub balance_before: Balance,
    pub amount_applied: Balance,
    pub balance_after: Balance,
}

impl AllocationLine {
    /// True when this line moves money and must reach persistence.
    pub fn is_effective(&self) -> bool {
        !self.amount_applied.is_zero()
    }
}

/// The per-debt breakdown for one payment, in queue order.
///
/// A plan is computed on demand and never mutated in place; a changed amount,
/// queue order, or override produces a freshly computed plan. Debts assigned
/// nothing keep a zero line for preview visibility.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AllocationPlan {
    pub lines: Vec<AllocationLine>,
    /// Caller-supplied cash actually consumed. Equals the signed sum of
    /// `amount_applied` over all lines: clearing a credit does not consume
    /// cash, it enlarges what the positive debts can draw.
    pub total_applied: Balance,
    /// Unconsumed cash, never negative.
    pub leftover: Balance,
}

impl AllocationPlan {
    pub fn line(&self, debt_id: u64) -> Option<&AllocationLine> {
        self.lines.iter().find(|l| l.debt_id == debt_id)
    }

    /// The lines to hand to persistence, in submission order: credit lines
    /// first (original relative order), then funded positive lines in queue
    /// order. Zero-amount lines stay in the preview but are omitted here.
    pub fn submission_lines(&self) -> Vec<&AllocationLine> {
        let credits = self
            .lines
            .iter()
            .filter(|l| l.amount_applied < Balance::ZERO);
        let funded = self
            .lines
            .iter()
            .filter(|l| l.amount_applied > Balance::ZERO);
        credits.chain(funded).collect()
    }
}

/// One durable payment row, the persisted projection of an effective line.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub debt_id: u64,
    pub amount: Balance,
    pub payer: String,
    pub date: String,
    pub remark: Option<String>,
}
