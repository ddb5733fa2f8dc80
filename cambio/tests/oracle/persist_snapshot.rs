use cambio_core::{CambioError, RawQuote};
use cambio_mock::{CallLog, MockBehavior, MockConnector};
use proptest::prelude::*;

use crate::helpers::{AR, STAMP, Sources};

#[tokio::test]
async fn snapshot_file_has_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");
    let log = CallLog::new();
    Sources::fixtures()
        .oracle(&log)
        .run_and_persist(&path)
        .await
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["updatedAt"], STAMP);
    assert_eq!(v["base"], "USD");
    assert_eq!(v["rates"]["ARS_BLUE"], 1190.0);
    assert_eq!(v["cryptoRates"]["BTC"], 65000.5);
    assert!(v["rates"].get("ARS").is_none());
    assert!(text.contains("\n  \"rates\": {"));
}

#[tokio::test]
async fn failed_run_leaves_previous_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");
    std::fs::write(&path, "previous").unwrap();

    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::argentina().failing(CambioError::connector(AR, "down"));
    let err = sources.oracle(&log).run_and_persist(&path).await.unwrap_err();

    assert!(matches!(err, CambioError::RequiredSource { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
}

#[tokio::test]
async fn failed_run_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");

    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::argentina().failing(CambioError::connector(AR, "down"));
    assert!(sources.oracle(&log).run_and_persist(&path).await.is_err());
    assert!(!path.exists());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn persisted_mep_is_never_zero(blue in 1.0f64..5000.0, mep in prop_oneof![Just(0.0f64), 1.0f64..5000.0]) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.json");
        tokio_test::block_on(async {
            let log = CallLog::new();
            let mut sources = Sources::fixtures();
            sources.ar = MockConnector::new(AR).with_local(MockBehavior::Return(vec![
                RawQuote::new("blue", blue, blue),
                RawQuote::sell_only("bolsa", mep),
            ]));
            sources.oracle(&log).run_and_persist(&path).await.unwrap();
        });
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let written = v["rates"]["ARS_MEP"].as_f64().unwrap();
        prop_assert!(written > 0.0);
        let expected = if mep == 0.0 { blue } else { mep };
        prop_assert!((written - expected).abs() <= expected * 1e-12);
    }
}

#[tokio::test]
async fn unparsable_local_payload_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");

    let log = CallLog::new();
    let mut sources = Sources::fixtures();
    sources.ar = MockConnector::argentina().failing(CambioError::Data(
        "cambio-dolarapi-ar: malformed quote record".into(),
    ));
    let err = sources.oracle(&log).run_and_persist(&path).await.unwrap_err();

    match err {
        CambioError::RequiredSource { reason, .. } => {
            assert!(reason.contains("malformed quote record"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!path.exists());
    assert_eq!(log.entries().len(), 1);
}
