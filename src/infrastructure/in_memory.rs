use crate::domain::debt::{Balance, Debt};
use crate::domain::plan::PaymentRecord;
use crate::domain::ports::{DebtStore, PaymentLedger};
use crate::error::{Result, SettlementError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory debt store.
///
/// Uses `Arc<RwLock<Vec<Debt>>>` to allow shared concurrent access while
/// preserving insertion order for `outstanding()`. Ideal for testing and for
/// previewing plans against a freshly loaded debt file.
#[derive(Default, Clone)]
pub struct InMemoryDebtStore {
    debts: Arc<RwLock<Vec<Debt>>>,
}

impl InMemoryDebtStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given debts.
    pub fn seeded(debts: Vec<Debt>) -> Self {
        Self {
            debts: Arc::new(RwLock::new(debts)),
        }
    }
}

#[async_trait]
impl DebtStore for InMemoryDebtStore {
    async fn get(&self, debt_id: u64) -> Result<Option<Debt>> {
        let debts = self.debts.read().await;
        Ok(debts.iter().find(|d| d.id == debt_id).copied())
    }

    async fn outstanding(&self) -> Result<Vec<Debt>> {
        let debts = self.debts.read().await;
        Ok(debts.iter().filter(|d| !d.balance.is_zero()).copied().collect())
    }

    async fn settle(&self, debt_id: u64, expected_before: Balance, after: Balance) -> Result<()> {
        let mut debts = self.debts.write().await;
        let debt = debts
            .iter_mut()
            .find(|d| d.id == debt_id)
            .ok_or(SettlementError::UnknownDebt(debt_id))?;
        if debt.balance != expected_before {
            return Err(SettlementError::BalanceConflict(debt_id));
        }
        debt.balance = after;
        Ok(())
    }
}

/// A thread-safe in-memory payment ledger, appending rows in commit order.
#[derive(Default, Clone)]
pub struct InMemoryPaymentLedger {
    rows: Arc<RwLock<Vec<PaymentRecord>>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn record(&self, payment: PaymentRecord) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.push(payment);
        Ok(())
    }

    async fn records(&self) -> Result<Vec<PaymentRecord>> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }
}
