use super::debt::{Balance, Debt};
use super::plan::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Source of truth for debt balances.
///
/// A computed plan is advisory until `settle` re-validates each balance at
/// commit time: two submissions touching the same debt must not double-spend
/// its remaining balance.
#[async_trait]
pub trait DebtStore: Send + Sync {
    async fn get(&self, debt_id: u64) -> Result<Option<Debt>>;

    /// All debts with a non-zero remaining balance, in insertion order.
    async fn outstanding(&self) -> Result<Vec<Debt>>;

    /// Compare-and-set on one debt's balance: succeeds only while the stored
    /// balance still equals `expected_before`, otherwise fails with
    /// `BalanceConflict` and leaves the debt untouched.
    async fn settle(&self, debt_id: u64, expected_before: Balance, after: Balance) -> Result<()>;
}

/// Sink for durable payment rows, one per effective allocation line.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    async fn record(&self, payment: PaymentRecord) -> Result<()>;
    async fn records(&self) -> Result<Vec<PaymentRecord>>;
}

pub type DebtStoreBox = Box<dyn DebtStore>;
pub type PaymentLedgerBox = Box<dyn PaymentLedger>;
