use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment request to be routed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub amount: Decimal,
    pub currency: String,
}

impl Transaction {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Zero and negative amounts can never be routed or processed.
    pub fn has_positive_amount(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}
