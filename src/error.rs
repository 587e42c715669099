use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T, E = SettlementError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
    #[error("payment of {requested} exceeds net outstanding total of {outstanding}")]
    OverPayment {
        requested: Decimal,
        outstanding: Decimal,
    },
    #[error("debt {0} not found")]
    UnknownDebt(u64),
    #[error("debt {0} balance changed since the plan was computed")]
    BalanceConflict(u64),
}

/// A violated allocation precondition. Each variant names the exact problem
/// so callers can surface an actionable message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("payment amount must be positive")]
    NonPositiveAmount,
    #[error("debt queue is empty")]
    EmptyQueue,
    #[error("debt {0} appears more than once in the queue")]
    DuplicateDebt(u64),
    #[error("debt {0} has a zero balance and must be excluded from the queue")]
    ZeroBalanceDebt(u64),
    #[error("override references debt {0} which is not in the queue")]
    OverrideUnknownDebt(u64),
    #[error("override references credit debt {0}; overrides apply to positive balances only")]
    OverrideOnCredit(u64),
    #[error("override for debt {0} must not be negative")]
    NegativeOverride(u64),
}
