use crate::domain::outcome::ProcessOutcome;
use crate::domain::ports::PaymentProcessor;
use crate::domain::processor::ProcessorDescriptor;
use crate::domain::transaction::Transaction;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

/// Processor that validates the amount against its own descriptor and
/// acknowledges the transaction without contacting a payment network.
#[derive(Debug, Clone)]
pub struct StandardProcessor {
    descriptor: ProcessorDescriptor,
}

impl StandardProcessor {
    pub fn new(descriptor: ProcessorDescriptor) -> Self {
        Self { descriptor }
    }

    fn validate(&self, tx: &Transaction) -> Result<(), String> {
        if !tx.has_positive_amount() {
            return Err("Invalid transaction amount".to_string());
        }
        let minimum = self.descriptor.min_transaction_amount();
        if tx.amount < minimum {
            return Err(format!(
                "Transaction amount is below the minimum required amount of {minimum}"
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentProcessor for StandardProcessor {
    fn name(&self) -> &str {
        self.descriptor.name()
    }

    async fn process(&self, tx: &Transaction) -> ProcessOutcome {
        match self.validate(tx) {
            Ok(()) => {
                let transaction_id = format!("txn_{}", Uuid::new_v4().simple());
                info!(
                    processor = self.name(),
                    amount = %tx.amount,
                    currency = %tx.currency,
                    transaction_id = %transaction_id,
                    "Processing transaction"
                );
                ProcessOutcome::Success {
                    processor: self.name().to_string(),
                    transaction_id,
                }
            }
            Err(message) => {
                error!(processor = self.name(), %message, "Transaction rejected");
                ProcessOutcome::error(message)
            }
        }
    }
}
