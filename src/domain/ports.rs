use super::outcome::ProcessOutcome;
use super::processor::ProcessorDescriptor;
use super::transaction::Transaction;
use async_trait::async_trait;
use std::sync::Arc;

/// A live processing handle for a selected processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    fn name(&self) -> &str;
    async fn process(&self, tx: &Transaction) -> ProcessOutcome;
}

/// Read-only source of the configured processors.
pub trait ProcessorCatalog: Send + Sync {
    /// All processors in configuration order. Stable across calls.
    fn list_processors(&self) -> &[ProcessorDescriptor];
    fn handle(&self, name: &str) -> Option<PaymentProcessorRef>;
}

pub type PaymentProcessorRef = Arc<dyn PaymentProcessor>;
pub type ProcessorCatalogRef = Arc<dyn ProcessorCatalog>;
pub type ProcessorFactory = Box<dyn Fn(ProcessorDescriptor) -> PaymentProcessorRef + Send + Sync>;
