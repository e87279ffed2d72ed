//! Router configuration loading and validation.
//!
//! Configuration is a TOML document with a `[priorities]` table, one
//! `[processors.<name>]` table per processor and an optional
//! `default_currency`. Processor tables keep the order they are written in.

use crate::domain::processor::ProcessorDescriptor;
use crate::domain::weights::PriorityWeights;
use crate::error::ConfigError;
use crate::infrastructure::registry::STANDARD_KIND;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_CONFIG: &str = include_str!("../config/smartpay.toml");

/// Settings for one configured processor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorSettings {
    pub name: String,
    /// Registry kind that builds this processor's handle.
    pub kind: String,
    pub cost_per_transaction: Decimal,
    pub supported_currencies: Vec<String>,
    pub min_transaction_amount: Decimal,
    pub reliability: Decimal,
}

impl ProcessorSettings {
    pub fn to_descriptor(&self) -> Result<ProcessorDescriptor, ConfigError> {
        ProcessorDescriptor::new(
            self.name.clone(),
            self.cost_per_transaction,
            self.supported_currencies.iter().cloned(),
            self.reliability,
            self.min_transaction_amount,
        )
    }
}

/// Fully parsed router configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub priorities: PriorityWeights,
    /// Processors in configuration order.
    pub processors: Vec<ProcessorSettings>,
    /// Currency assumed for input rows that do not name one.
    pub default_currency: String,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    priorities: PriorityWeights,
    #[serde(default)]
    processors: toml::Table,
    #[serde(default = "default_currency")]
    default_currency: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProcessor {
    #[serde(default = "default_kind")]
    kind: String,
    cost_per_transaction: Decimal,
    supported_currencies: Vec<String>,
    #[serde(default)]
    min_transaction_amount: Decimal,
    #[serde(default = "default_reliability")]
    reliability: Decimal,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_kind() -> String {
    STANDARD_KIND.to_string()
}

fn default_reliability() -> Decimal {
    Decimal::ONE
}

impl RouterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_str(&content)
    }

    /// The configuration shipped with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

        raw.priorities.validate()?;
        if raw.default_currency.trim().is_empty() {
            return Err(ConfigError::invalid("default_currency", "must not be empty"));
        }

        let mut processors = Vec::with_capacity(raw.processors.len());
        for (name, value) in raw.processors {
            let entry: RawProcessor = value.try_into().map_err(|e: toml::de::Error| {
                ConfigError::invalid(format!("processors.{name}"), e.to_string())
            })?;

            let settings = ProcessorSettings {
                name,
                kind: entry.kind,
                cost_per_transaction: entry.cost_per_transaction,
                supported_currencies: entry.supported_currencies,
                min_transaction_amount: entry.min_transaction_amount,
                reliability: entry.reliability,
            };
            // Surface range errors at load time rather than when the catalog is built.
            settings.to_descriptor()?;
            processors.push(settings);
        }

        Ok(Self {
            priorities: raw.priorities,
            processors,
            default_currency: raw.default_currency,
        })
    }
}
