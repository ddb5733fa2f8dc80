use std::sync::Arc;

use cambio::Oracle;
use cambio_core::{CambioError, RuleTable};
use cambio_mock::MockConnector;

#[test]
fn world_connector_is_mandatory() {
    let err = Oracle::builder()
        .local_source(
            "argentina",
            Arc::new(MockConnector::argentina()),
            RuleTable::argentina(),
        )
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CambioError::InvalidArg(_)));
}

#[test]
fn local_source_must_provide_quotes() {
    let err = Oracle::builder()
        .local_source("argentina", Arc::new(MockConnector::world()), RuleTable::argentina())
        .world_rates(Arc::new(MockConnector::world()))
        .build()
        .err()
        .unwrap();
    match err {
        CambioError::InvalidArg(msg) => assert!(msg.contains("local-quotes")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn world_connector_must_provide_world_rates() {
    let err = Oracle::builder()
        .world_rates(Arc::new(MockConnector::argentina()))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CambioError::InvalidArg(_)));
}

#[test]
fn crypto_connector_must_provide_tickers() {
    let err = Oracle::builder()
        .world_rates(Arc::new(MockConnector::world()))
        .crypto_tickers(Arc::new(MockConnector::bolivia()))
        .build()
        .err()
        .unwrap();
    match err {
        CambioError::InvalidArg(msg) => assert!(msg.contains("crypto-tickers")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn world_only_oracle_builds_with_defaults() {
    let oracle = Oracle::builder()
        .world_rates(Arc::new(MockConnector::world()))
        .build()
        .unwrap();
    assert_eq!(oracle.config().base_currency, "USD");
    assert_eq!(oracle.config().reserved_codes, vec!["ARS", "BOB"]);
}
