use serde::{Deserialize, Serialize};

/// Result of handing a transaction to a processor.
///
/// Failures are values rather than errors so that a batch keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessOutcome {
    Success {
        processor: String,
        transaction_id: String,
    },
    Error {
        message: String,
    },
}

impl ProcessOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
