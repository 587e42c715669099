use crate::error::InvalidRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A signed monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for financial calculations. Positive means
/// money owed to the collecting party; negative means a credit owed back.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A strictly positive monetary amount, used for the cash being applied.
///
/// Ensures that payment amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, InvalidRequest> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(InvalidRequest::NonPositiveAmount)
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = InvalidRequest;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Basic arithmetic so Balance is a usable value object.
impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// An outstanding debt ("IOU") as it enters an allocation queue.
///
/// The position of a debt within the caller-supplied queue is its priority
/// among debts of the same sign; the struct itself carries no ordering.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Debt {
    /// Identifier, unique within a single allocation request.
    pub id: u64,
    /// Remaining balance. Negative denotes a credit owed back to the
    /// counterparty (an overpayment on a prior settlement).
    pub balance: Balance,
}

impl Debt {
    pub fn new(id: u64, balance: Decimal) -> Self {
        Self {
            id,
            balance: Balance::new(balance),
        }
    }

    /// True when this debt is a credit owed back (negative balance).
    pub fn is_credit(&self) -> bool {
        self.balance.0 < Decimal::ZERO
    }
}
