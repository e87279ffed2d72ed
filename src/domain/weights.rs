use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Multipliers for the three scoring criteria.
///
/// Weights are not normalized; any non-negative values are accepted. Keys
/// missing from configuration fall back to their own default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    #[serde(default = "default_currency_support", alias = "currency_support_weight")]
    pub currency_support: Decimal,
    #[serde(default = "default_reliability", alias = "reliability_weight")]
    pub reliability: Decimal,
    #[serde(default = "default_transaction_cost", alias = "transaction_cost_weight")]
    pub transaction_cost: Decimal,
}

fn default_currency_support() -> Decimal {
    dec!(3)
}

fn default_reliability() -> Decimal {
    dec!(2)
}

fn default_transaction_cost() -> Decimal {
    dec!(1)
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            currency_support: default_currency_support(),
            reliability: default_reliability(),
            transaction_cost: default_transaction_cost(),
        }
    }
}

impl PriorityWeights {
    pub fn new(
        currency_support: Decimal,
        reliability: Decimal,
        transaction_cost: Decimal,
    ) -> Result<Self, ConfigError> {
        let weights = Self {
            currency_support,
            reliability,
            transaction_cost,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("priorities.currency_support", self.currency_support),
            ("priorities.reliability", self.reliability),
            ("priorities.transaction_cost", self.transaction_cost),
        ] {
            if value < Decimal::ZERO {
                return Err(ConfigError::invalid(
                    field,
                    format!("weight must be non-negative, got {value}"),
                ));
            }
        }
        // Reliability and the cost score are both within [0, 1], so the weight
        // sum is the largest score any processor can reach.
        self.currency_support
            .checked_add(self.reliability)
            .and_then(|sum| sum.checked_add(self.transaction_cost))
            .ok_or_else(|| {
                ConfigError::invalid("priorities", "combined weights overflow the score range")
            })?;
        Ok(())
    }
}
