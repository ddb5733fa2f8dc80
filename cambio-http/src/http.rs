//! Shared request plumbing and error normalisation for the HTTP connectors.

use cambio_core::CambioError;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("cambio/", env!("CARGO_PKG_VERSION"));
const SNIPPET_LEN: usize = 200;

/// Build the `reqwest::Client` shared by every connector.
///
/// # Errors
/// Returns `Other` if the TLS backend cannot be initialised.
pub fn default_client() -> Result<reqwest::Client, CambioError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CambioError::Other(e.to_string()))
}

pub(crate) fn parse_base(base: &str) -> Result<Url, CambioError> {
    Url::parse(base).map_err(|e| CambioError::InvalidArg(format!("invalid base url {base}: {e}")))
}

pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, CambioError> {
    base.join(path)
        .map_err(|e| CambioError::InvalidArg(format!("invalid endpoint {path}: {e}")))
}

// Request URLs may embed credentials, so they are stripped from messages.
fn map_reqwest_err(connector: &str, e: reqwest::Error) -> CambioError {
    let e = e.without_url();
    if e.is_timeout() {
        CambioError::connector(connector, "request timed out")
    } else if e.is_connect() {
        CambioError::connector(connector, format!("connect error: {e}"))
    } else {
        CambioError::connector(connector, e.to_string())
    }
}

/// Leading part of a body for error messages.
pub(crate) fn snippet(body: &str) -> String {
    let mut out: String = body.chars().take(SNIPPET_LEN).collect();
    if body.chars().count() > SNIPPET_LEN {
        out.push('…');
    }
    out
}

/// GET `url` and return the body of a `200 OK` response.
pub(crate) async fn get_text(
    client: &reqwest::Client,
    url: Url,
    connector: &'static str,
) -> Result<String, CambioError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(connector, host = url.host_str().unwrap_or_default(), "GET");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| map_reqwest_err(connector, e))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| map_reqwest_err(connector, e))?;

    if status != StatusCode::OK {
        return Err(CambioError::connector(
            connector,
            format!("status {}: {}", status.as_u16(), snippet(&body)),
        ));
    }
    Ok(body)
}

/// Parse a body as JSON; anything that is not JSON is a `Data` error.
pub(crate) fn parse_json(connector: &str, body: &str) -> Result<Value, CambioError> {
    serde_json::from_str(body)
        .map_err(|e| CambioError::Data(format!("{connector}: payload is not JSON: {e}")))
}

/// Fetch and parse JSON in one step.
pub(crate) async fn get_json(
    client: &reqwest::Client,
    url: Url,
    connector: &'static str,
) -> Result<Value, CambioError> {
    let body = get_text(client, url, connector).await?;
    parse_json(connector, &body)
}
