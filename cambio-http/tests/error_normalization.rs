use cambio_core::CambioError;
use cambio_core::connector::{LocalQuoteProvider, TickerProvider};
use cambio_http::{CryptoTickerConnector, CryptoVenue, DolarApiConnector};
use httpmock::prelude::*;

#[tokio::test]
async fn non_200_maps_to_connector_error_with_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/dolares");
            then.status(503).body("upstream unavailable");
        })
        .await;
    let c = DolarApiConnector::with_base_url("cambio-dolarapi-ar", &server.base_url()).unwrap();
    match c.local_quotes().await.unwrap_err() {
        CambioError::Connector { connector, msg } => {
            assert_eq!(connector, "cambio-dolarapi-ar");
            assert!(msg.starts_with("status 503"));
            assert!(msg.contains("upstream unavailable"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn html_body_maps_to_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/ticker/price");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;
    let c = CryptoTickerConnector::with_base_url(CryptoVenue::Binance, &server.base_url()).unwrap();
    assert!(matches!(c.tickers().await, Err(CambioError::Data(_))));
}

#[tokio::test]
async fn error_envelope_maps_to_provider_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/ticker/price");
            then.status(200)
                .body(r#"{"code":0,"msg":"Service unavailable from a restricted location"}"#);
        })
        .await;
    let c = CryptoTickerConnector::with_base_url(CryptoVenue::Binance, &server.base_url()).unwrap();
    let err = c.tickers().await.unwrap_err();
    assert!(err.is_fatal_for_optional());
}

#[tokio::test]
async fn unreachable_host_maps_to_connector_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let c = DolarApiConnector::with_base_url("cambio-dolarapi-ar", "http://127.0.0.1:9").unwrap();
    assert!(matches!(
        c.local_quotes().await,
        Err(CambioError::Connector { .. })
    ));
}

#[tokio::test]
async fn malformed_local_quote_record_fails_the_fetch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/dolares");
            then.status(200).body(
                r#"[{"casa":"blue","compra":"1180,00","venta":1200.0},{"casa":"oficial","compra":1020.0,"venta":1060.0}]"#,
            );
        })
        .await;
    let c = DolarApiConnector::with_base_url("cambio-dolarapi-ar", &server.base_url()).unwrap();
    assert!(matches!(c.local_quotes().await, Err(CambioError::Data(_))));
}
