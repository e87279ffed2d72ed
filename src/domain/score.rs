use super::processor::ProcessorDescriptor;
use super::weights::PriorityWeights;
use rust_decimal::Decimal;
use serde::Serialize;

/// Weighted contribution of each criterion to a processor's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub currency_support: Decimal,
    pub reliability: Decimal,
    pub transaction_cost: Decimal,
}

impl ScoreBreakdown {
    /// Scores a processor that is already known to support the currency.
    ///
    /// The currency weight is therefore added unconditionally. The cost term
    /// saturates at zero for any cost of one or more.
    pub fn for_eligible(processor: &ProcessorDescriptor, weights: &PriorityWeights) -> Self {
        let cost_score = (Decimal::ONE - processor.cost_per_transaction()).max(Decimal::ZERO);

        Self {
            currency_support: weights.currency_support,
            reliability: processor.reliability() * weights.reliability,
            transaction_cost: cost_score * weights.transaction_cost,
        }
    }

    pub fn total(&self) -> Decimal {
        self.currency_support + self.reliability + self.transaction_cost
    }
}

/// A scored candidate, valid for one routing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult<'a> {
    pub processor: &'a ProcessorDescriptor,
    pub score: Decimal,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ScoreResult<'a> {
    pub fn compute(processor: &'a ProcessorDescriptor, weights: &PriorityWeights) -> Self {
        let breakdown = ScoreBreakdown::for_eligible(processor, weights);
        Self {
            processor,
            score: breakdown.total(),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn descriptor(cost: Decimal, reliability: Decimal) -> ProcessorDescriptor {
        ProcessorDescriptor::new("p", cost, ["USD"], reliability, dec!(0)).unwrap()
    }

    #[test]
    fn test_score_with_default_weights() {
        let p = descriptor(dec!(0.5), dec!(0.85));
        let result = ScoreResult::compute(&p, &PriorityWeights::default());

        assert_eq!(result.breakdown.currency_support, dec!(3));
        assert_eq!(result.breakdown.reliability, dec!(1.7));
        assert_eq!(result.breakdown.transaction_cost, dec!(0.5));
        assert_eq!(result.score, dec!(5.2));
    }

    #[test]
    fn test_cost_score_saturates_at_zero() {
        let weights = PriorityWeights::default();
        let p_one = descriptor(dec!(1.0), dec!(0));
        let p_above = descriptor(dec!(3.75), dec!(0));
        let at_one = ScoreResult::compute(&p_one, &weights);
        let above_one = ScoreResult::compute(&p_above, &weights);

        assert_eq!(at_one.breakdown.transaction_cost, Decimal::ZERO);
        assert_eq!(above_one.breakdown.transaction_cost, Decimal::ZERO);
        assert_eq!(at_one.score, above_one.score);
    }

    #[test]
    fn test_free_processor_gets_full_cost_weight() {
        let weights = PriorityWeights::new(dec!(0), dec!(0), dec!(4)).unwrap();
        let p = descriptor(dec!(0), dec!(0.3));
        let result = ScoreResult::compute(&p, &weights);
        assert_eq!(result.score, dec!(4));
    }
}
