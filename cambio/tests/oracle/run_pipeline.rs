use cambio_core::{RawQuote, Substitution};
use cambio_mock::{CallLog, MockBehavior, MockConnector};

use crate::helpers::{AR, BO, CRYPTO, STAMP, Sources, WORLD, approx, call};

#[tokio::test]
async fn fixtures_produce_full_snapshot() {
    let log = CallLog::new();
    let report = Sources::fixtures().oracle(&log).run().await.unwrap();
    let snap = &report.snapshot;

    assert_eq!(snap.updated_at(), STAMP);
    assert_eq!(snap.base(), "USD");

    let rates = snap.rates();
    assert_eq!(rates.get("ARS_BLUE"), Some(1190.0));
    assert_eq!(rates.get("ARS_OFFICIAL"), Some(1040.0));
    assert_eq!(rates.get("ARS_CRYPTO"), Some(1180.0));
    assert_eq!(rates.get("ARS_MEP"), Some(1172.3));
    assert!(approx(rates.get("BOB_OFFICIAL"), 6.91));
    assert_eq!(rates.get("BOB_BLUE"), Some(13.25));
    assert_eq!(rates.get("EUR"), Some(0.9213));
    assert_eq!(rates.get("USD"), Some(1.0));
    assert!(!rates.contains("ARS"));
    assert!(!rates.contains("BOB"));
    // untracked categories never become rates
    assert!(!rates.contains("ARS_TARJETA"));

    let crypto = snap.crypto_rates();
    assert_eq!(crypto.get("BTC"), Some(65000.5));
    assert_eq!(crypto.get("DOGE"), Some(0.1587));
    assert_eq!(crypto.len(), 4);
    assert!(!crypto.contains("PEPE"));
    assert!(!crypto.contains("XYZ"));

    assert!(report.substitutions.is_empty());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn sources_are_contacted_in_fixed_order() {
    let log = CallLog::new();
    Sources::fixtures().oracle(&log).run().await.unwrap();
    assert_eq!(
        log.entries(),
        vec![
            call(AR, "local-quotes"),
            call(BO, "local-quotes"),
            call(WORLD, "world-rates"),
            call(CRYPTO, "crypto-tickers"),
        ]
    );
}

#[tokio::test]
async fn zero_mep_falls_back_to_blue() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::new(AR).with_local(MockBehavior::Return(vec![
        RawQuote::new("blue", 100.0, 110.0),
        RawQuote::new("bolsa", 0.0, 0.0),
    ]));
    let report = sources.oracle(&log).run().await.unwrap();

    assert_eq!(report.snapshot.rates().get("ARS_MEP"), Some(105.0));
    assert_eq!(
        report.substitutions,
        vec![Substitution {
            target: "ARS_MEP".to_string(),
            fallback: "ARS_BLUE".to_string(),
            value: 105.0,
        }]
    );
}

#[tokio::test]
async fn missing_mep_without_blue_is_omitted() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::new(AR)
        .with_local(MockBehavior::Return(vec![RawQuote::new("oficial", 10.0, 12.0)]));
    let report = sources.oracle(&log).run().await.unwrap();

    let rates = report.snapshot.rates();
    assert!(!rates.contains("ARS_MEP"));
    assert_eq!(rates.get("ARS_OFFICIAL"), Some(11.0));
}

#[tokio::test]
async fn without_crypto_connector_the_crypto_table_is_empty() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.crypto = None;
    let report = sources.oracle(&log).run().await.unwrap();

    assert!(report.snapshot.crypto_rates().is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(log.entries().len(), 3);
}

#[tokio::test]
async fn repeated_runs_are_identical_with_fixed_clock() {
    let log = CallLog::new();
    let oracle = Sources::fixtures().oracle(&log);
    let a = oracle.run().await.unwrap();
    let b = oracle.run().await.unwrap();
    assert_eq!(a, b);
}
