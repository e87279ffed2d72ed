use super::router::SelectionRouter;
use crate::domain::outcome::ProcessOutcome;
use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use tracing::error;

/// Routes a transaction and hands it to the selected processor.
#[derive(Clone)]
pub struct PaymentDispatcher {
    router: SelectionRouter,
}

impl PaymentDispatcher {
    pub fn new(router: SelectionRouter) -> Self {
        Self { router }
    }

    /// Selects a processor for `tx` and processes it.
    ///
    /// Processor-level rejections come back as `ProcessOutcome::Error`; only
    /// routing failures and missing handles are returned as `Err`.
    pub async fn dispatch(&self, tx: &Transaction) -> Result<ProcessOutcome> {
        let selected = self.router.route(tx)?;

        let Some(handle) = self.router.catalog().handle(selected.name()) else {
            error!(processor = selected.name(), "Selected processor has no handle");
            return Err(PaymentError::ProcessorUnavailable(selected.name().to_string()));
        };

        Ok(handle.process(tx).await)
    }
}
