use rust_decimal_macros::dec;
use smartpay::application::dispatcher::PaymentDispatcher;
use smartpay::domain::outcome::ProcessOutcome;
use smartpay::domain::ports::ProcessorCatalogRef;
use smartpay::domain::transaction::Transaction;
use smartpay::domain::weights::PriorityWeights;

mod common;

#[tokio::test]
async fn test_router_shared_across_tasks() {
    let router = common::router(common::scenario_descriptors(), PriorityWeights::default());

    let mut handles = Vec::new();
    for i in 0..16 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let amount = if i % 2 == 0 { dec!(100) } else { dec!(5) };
            router
                .route(&Transaction::new(amount, "USD"))
                .map(|p| p.name().to_string())
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "A");
    }
}

#[test]
fn test_router_shared_across_threads() {
    let router = common::router(common::scenario_descriptors(), PriorityWeights::default());
    let router = &router;

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let tx = Transaction::new(dec!(250), "EUR");
                    router.route(&tx).unwrap().name().to_string()
                })
            })
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), "A");
        }
    });
}

#[tokio::test]
async fn test_catalog_as_trait_object() {
    let router = common::router(common::scenario_descriptors(), PriorityWeights::default());
    let catalog: ProcessorCatalogRef = router.catalog().clone();

    let handle = catalog.handle("B").expect("B is registered");
    let outcome = tokio::spawn(async move {
        let tx = Transaction::new(dec!(150), "USD");
        handle.process(&tx).await
    })
    .await
    .unwrap();

    assert!(matches!(outcome, ProcessOutcome::Success { processor, .. } if processor == "B"));
}

#[tokio::test]
async fn test_dispatcher_batch_keeps_going_after_failures() {
    let dispatcher = PaymentDispatcher::new(common::router(
        common::scenario_descriptors(),
        PriorityWeights::default(),
    ));

    let batch = [
        Transaction::new(dec!(100), "USD"),
        Transaction::new(dec!(0.5), "USD"),
        Transaction::new(dec!(-10), "USD"),
        Transaction::new(dec!(20), "EUR"),
    ];

    let mut successes = 0;
    let mut failures = 0;
    for tx in &batch {
        match dispatcher.dispatch(tx).await {
            Ok(outcome) if outcome.is_success() => successes += 1,
            _ => failures += 1,
        }
    }

    assert_eq!(successes, 2);
    assert_eq!(failures, 2);
}
