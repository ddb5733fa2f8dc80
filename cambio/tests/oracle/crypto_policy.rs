use cambio_core::{CambioError, SymbolMap, TickerPrice};
use cambio_mock::{CallLog, MockBehavior, MockConnector};

use crate::helpers::{CRYPTO, Sources};

#[tokio::test]
async fn transport_failure_degrades_to_empty_table() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    let cause = CambioError::connector(CRYPTO, "request timed out");
    sources.crypto = Some(MockConnector::crypto().failing(cause.clone()));
    let report = sources.oracle(&log).run().await.unwrap();

    assert!(report.snapshot.crypto_rates().is_empty());
    assert_eq!(report.warnings, vec![cause]);
    assert_eq!(report.snapshot.rates().get("ARS_BLUE"), Some(1190.0));
}

#[tokio::test]
async fn unparsable_body_degrades_to_empty_table() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.crypto = Some(
        MockConnector::crypto().failing(CambioError::Data("payload is not JSON".into())),
    );
    let report = sources.oracle(&log).run().await.unwrap();

    assert!(report.snapshot.crypto_rates().is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[tokio::test]
async fn error_envelope_aborts_the_run() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    let rejected = CambioError::provider_rejected(CRYPTO, "unexpected ticker payload");
    sources.crypto = Some(MockConnector::crypto().failing(rejected.clone()));
    let err = sources.oracle(&log).run().await.unwrap_err();

    assert_eq!(err, rejected);
}

#[tokio::test]
async fn only_basket_members_with_valid_prices_are_kept() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.crypto = Some(MockConnector::new(CRYPTO).with_tickers(
        MockBehavior::Return(vec![
            TickerPrice::new("BTC-USDT", "60000"),
            TickerPrice::new("ETH-USDT", "NaN"),
            TickerPrice::new("FOO-USDT", "1"),
            TickerPrice::new("SOL-BTC", "0.002"),
        ]),
        SymbolMap::with_suffix("-USDT"),
    ));
    let report = sources.oracle(&log).run().await.unwrap();

    let crypto = report.snapshot.crypto_rates();
    assert_eq!(crypto.iter().collect::<Vec<_>>(), vec![("BTC", 60000.0)]);
}
