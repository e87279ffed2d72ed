use crate::domain::ports::ProcessorCatalogRef;
use crate::domain::processor::ProcessorDescriptor;
use crate::domain::score::ScoreResult;
use crate::domain::transaction::Transaction;
use crate::domain::weights::PriorityWeights;
use crate::error::RoutingError;
use tracing::{debug, info, warn};

/// Picks the best-fit processor for a transaction.
///
/// `SelectionRouter` owns an immutable snapshot of the catalog and the priority
/// weights. Routing is a pure computation over those inputs, so a single
/// router can be shared between threads and tasks without locking.
#[derive(Clone)]
pub struct SelectionRouter {
    catalog: ProcessorCatalogRef,
    weights: PriorityWeights,
}

impl SelectionRouter {
    /// Creates a new `SelectionRouter`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The configured processors, in configuration order.
    /// * `weights` - Multipliers applied when scoring eligible processors.
    pub fn new(catalog: ProcessorCatalogRef, weights: PriorityWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn catalog(&self) -> &ProcessorCatalogRef {
        &self.catalog
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// Scores every eligible processor, in catalog order.
    ///
    /// Non-positive amounts are rejected up front, so a processor configured
    /// with a zero minimum still never sees them.
    pub fn evaluate(&self, tx: &Transaction) -> Vec<ScoreResult<'_>> {
        if !tx.has_positive_amount() {
            debug!(amount = %tx.amount, "Rejecting non-positive amount before filtering");
            return Vec::new();
        }

        self.catalog
            .list_processors()
            .iter()
            .filter(|processor| processor.is_eligible(tx))
            .map(|processor| {
                let result = ScoreResult::compute(processor, &self.weights);
                debug!(
                    processor = processor.name(),
                    score = %result.score,
                    "Evaluated processor"
                );
                result
            })
            .collect()
    }

    /// Routes a transaction to the highest-scoring eligible processor.
    ///
    /// Ties go to the processor listed first in the catalog.
    pub fn route(&self, tx: &Transaction) -> Result<&ProcessorDescriptor, RoutingError> {
        let mut best: Option<ScoreResult<'_>> = None;
        for candidate in self.evaluate(tx) {
            // Strict comparison: an equal score never displaces the leader.
            if best.is_none_or(|leader| candidate.score > leader.score) {
                best = Some(candidate);
            }
        }

        let Some(winner) = best else {
            warn!(
                amount = %tx.amount,
                currency = %tx.currency,
                "No suitable payment processor"
            );
            return Err(RoutingError::NoSuitableProcessor);
        };

        info!(
            processor = winner.processor.name(),
            score = %winner.score,
            "Selected processor"
        );
        Ok(winner.processor)
    }
}
