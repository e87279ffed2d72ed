#![allow(dead_code)]

use rust_decimal::Decimal;
use smartpay::application::router::SelectionRouter;
use smartpay::domain::processor::ProcessorDescriptor;
use smartpay::domain::weights::PriorityWeights;
use smartpay::infrastructure::in_memory::InMemoryCatalog;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn descriptor(
    name: &str,
    cost: Decimal,
    currencies: &[&str],
    reliability: Decimal,
    min: Decimal,
) -> ProcessorDescriptor {
    ProcessorDescriptor::new(name, cost, currencies.iter().copied(), reliability, min)
        .expect("valid descriptor")
}

pub fn router(descriptors: Vec<ProcessorDescriptor>, weights: PriorityWeights) -> SelectionRouter {
    let catalog = InMemoryCatalog::from_descriptors(descriptors).expect("unique names");
    SelectionRouter::new(Arc::new(catalog), weights)
}

/// The two-processor catalog used throughout the routing scenarios.
pub fn scenario_descriptors() -> Vec<ProcessorDescriptor> {
    use rust_decimal_macros::dec;
    vec![
        descriptor("A", dec!(0.5), &["USD", "EUR"], dec!(0.85), dec!(1)),
        descriptor("B", dec!(1.0), &["USD"], dec!(0.85), dec!(100)),
    ]
}

pub fn write_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub const SCENARIO_CONFIG: &str = r#"
[processors.A]
cost_per_transaction = 0.5
supported_currencies = ["USD", "EUR"]
reliability = 0.85
min_transaction_amount = 1

[processors.B]
cost_per_transaction = 1.0
supported_currencies = ["USD"]
reliability = 0.85
min_transaction_amount = 100
"#;
