use thiserror::Error;

/// The only way routing can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingError {
    #[error("No suitable payment processors available.")]
    NoSuitableProcessor,
}

/// Problems found while loading or resolving the processor configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("unknown processor kind '{kind}' for processor '{processor}'")]
    UnknownProcessorKind { processor: String, kind: String },
    #[error("processor '{0}' is configured more than once")]
    DuplicateProcessor(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    RoutingError(#[from] RoutingError),
    #[error("Processor '{0}' has no registered handle")]
    ProcessorUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
