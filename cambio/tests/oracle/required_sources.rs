use cambio_core::{CambioError, SourceRole, WorldRates};
use cambio_mock::{CallLog, MockBehavior, MockConnector};

use crate::helpers::{AR, BO, Sources, WORLD, call};

fn transport() -> CambioError {
    CambioError::connector("upstream", "connect error: refused")
}

#[tokio::test]
async fn argentina_failure_aborts_before_anything_else() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::argentina().failing(transport());
    let err = sources.oracle(&log).run().await.unwrap_err();

    match err {
        CambioError::RequiredSource {
            role,
            connector,
            reason,
        } => {
            assert_eq!(role, SourceRole::LocalQuotes);
            assert_eq!(connector, AR);
            assert!(reason.contains("refused"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(log.entries(), vec![call(AR, "local-quotes")]);
}

#[tokio::test]
async fn bolivia_failure_is_fatal() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.bo = MockConnector::bolivia().failing(CambioError::Data("truncated".into()));
    let err = sources.oracle(&log).run().await.unwrap_err();

    assert!(matches!(
        err,
        CambioError::RequiredSource { role: SourceRole::LocalQuotes, ref connector, .. } if connector == BO
    ));
    assert_eq!(
        log.entries(),
        vec![call(AR, "local-quotes"), call(BO, "local-quotes")]
    );
}

#[tokio::test]
async fn world_failure_skips_crypto() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.world = MockConnector::world().failing(CambioError::provider_rejected(
        "cambio-exchangerate-api",
        "invalid-key",
    ));
    let err = sources.oracle(&log).run().await.unwrap_err();

    match err {
        CambioError::RequiredSource { role, reason, .. } => {
            assert_eq!(role, SourceRole::WorldRates);
            assert!(reason.contains("invalid-key"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(log.entries().last(), Some(&call(WORLD, "world-rates")));
    assert_eq!(log.entries().len(), 3);
}

#[tokio::test]
async fn unsuccessful_world_status_is_fatal() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.world = MockConnector::new(WORLD).with_world(MockBehavior::Return(WorldRates {
        result: "error".to_string(),
        conversion_rates: None,
    }));
    let err = sources.oracle(&log).run().await.unwrap_err();

    assert!(matches!(
        err,
        CambioError::RequiredSource {
            role: SourceRole::WorldRates,
            ..
        }
    ));
    assert_eq!(log.entries().len(), 3);
}

#[tokio::test]
async fn success_without_table_keeps_local_rates() {
    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.world = MockConnector::new(WORLD).with_world(MockBehavior::Return(WorldRates {
        result: "success".to_string(),
        conversion_rates: None,
    }));
    let report = sources.oracle(&log).run().await.unwrap();

    let rates = report.snapshot.rates();
    assert_eq!(rates.get("ARS_BLUE"), Some(1190.0));
    assert!(!rates.contains("EUR"));
}
