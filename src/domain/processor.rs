use super::transaction::Transaction;
use crate::error::ConfigError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// Static attributes of a configured payment processor.
///
/// Built once from configuration and never mutated afterwards, so the fields
/// are only reachable through accessors. The constructor enforces the value
/// ranges the router relies on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessorDescriptor {
    name: String,
    cost_per_transaction: Decimal,
    supported_currencies: BTreeSet<String>,
    reliability: Decimal,
    min_transaction_amount: Decimal,
}

impl ProcessorDescriptor {
    /// Creates a descriptor, rejecting values outside their documented ranges.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique, non-empty identifier.
    /// * `cost_per_transaction` - Non-negative; `0` is free, `1` and above score no cost bonus.
    /// * `supported_currencies` - Currency codes, matched exactly.
    /// * `reliability` - Between `0` and `1` inclusive.
    /// * `min_transaction_amount` - Non-negative.
    pub fn new<I, S>(
        name: impl Into<String>,
        cost_per_transaction: Decimal,
        supported_currencies: I,
        reliability: Decimal,
        min_transaction_amount: Decimal,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid("name", "processor name must not be empty"));
        }
        if cost_per_transaction < Decimal::ZERO {
            return Err(ConfigError::invalid(
                format!("{name}.cost_per_transaction"),
                format!("must be non-negative, got {cost_per_transaction}"),
            ));
        }
        if reliability < Decimal::ZERO || reliability > Decimal::ONE {
            return Err(ConfigError::invalid(
                format!("{name}.reliability"),
                format!("must be between 0 and 1, got {reliability}"),
            ));
        }
        if min_transaction_amount < Decimal::ZERO {
            return Err(ConfigError::invalid(
                format!("{name}.min_transaction_amount"),
                format!("must be non-negative, got {min_transaction_amount}"),
            ));
        }

        Ok(Self {
            name,
            cost_per_transaction,
            supported_currencies: supported_currencies.into_iter().map(Into::into).collect(),
            reliability,
            min_transaction_amount,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost_per_transaction(&self) -> Decimal {
        self.cost_per_transaction
    }

    pub fn supported_currencies(&self) -> &BTreeSet<String> {
        &self.supported_currencies
    }

    pub fn reliability(&self) -> Decimal {
        self.reliability
    }

    pub fn min_transaction_amount(&self) -> Decimal {
        self.min_transaction_amount
    }

    pub fn supports_currency(&self, currency: &str) -> bool {
        self.supported_currencies.contains(currency)
    }

    /// Currency is supported and the amount meets the minimum.
    pub fn is_eligible(&self, tx: &Transaction) -> bool {
        self.supports_currency(&tx.currency) && tx.amount >= self.min_transaction_amount
    }
}
