//! The single inbound operation: `?t=<ticker>` in, one JSON snapshot out.
//!
//! [`respond`] carries the whole status/body contract so it can be exercised
//! without a web server; with the `server` feature, [`router`] mounts it on axum.

use reqwest::StatusCode;
use serde::Serialize;

use crate::EtfClient;
use crate::snapshot::fetch_snapshot;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// A fully rendered response: status, content type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtfResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl EtfResponse {
    fn json(status: StatusCode, body: String) -> Self {
        Self {
            status,
            content_type: JSON,
            body,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content_type: TEXT,
            body: message,
        }
    }
}

/// Answers one request for `ticker` (the raw `t` query parameter).
///
/// - missing or empty ticker: 400 with `{"error":"ETF ticker missing"}`
/// - success: 200 with the serialized [`EtfSnapshot`](crate::EtfSnapshot)
/// - any other failure: 500 with the error message as plain text
pub async fn respond(client: &EtfClient, ticker: Option<&str>) -> EtfResponse {
    let ticker = ticker.unwrap_or_default();

    match fetch_snapshot(client, ticker).await {
        Ok(snapshot) => match serde_json::to_string(&snapshot) {
            Ok(body) => EtfResponse::json(StatusCode::OK, body),
            Err(e) => {
                tracing::error!(ticker, error = %e, "failed to serialize snapshot");
                EtfResponse::failed(e.to_string())
            }
        },
        Err(e) if e.is_client_error() => {
            let message = e.to_string();
            let body = serde_json::to_string(&ErrorBody { error: &message })
                .unwrap_or_else(|_| format!(r#"{{"error":"{message}"}}"#));
            EtfResponse::json(StatusCode::BAD_REQUEST, body)
        }
        Err(e) => {
            tracing::error!(ticker, error = %e, "snapshot request failed");
            EtfResponse::failed(e.to_string())
        }
    }
}

#[cfg(feature = "server")]
pub use server::{EtfQuery, router};

#[cfg(feature = "server")]
mod server {
    use axum::Router;
    use axum::extract::{Query, State};
    use axum::http::header;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use serde::Deserialize;

    use super::{EtfResponse, respond};
    use crate::EtfClient;

    /// Query string of the snapshot endpoint.
    #[derive(Debug, Default, Deserialize)]
    pub struct EtfQuery {
        /// Ticker symbol, used as supplied.
        pub t: Option<String>,
    }

    impl IntoResponse for EtfResponse {
        fn into_response(self) -> Response {
            (
                self.status,
                [(header::CONTENT_TYPE, self.content_type)],
                self.body,
            )
                .into_response()
        }
    }

    async fn etf_info(
        State(client): State<EtfClient>,
        Query(query): Query<EtfQuery>,
    ) -> EtfResponse {
        respond(&client, query.t.as_deref()).await
    }

    /// Routes `GET /` and `GET /etfInfo` to the snapshot handler.
    pub fn router(client: EtfClient) -> Router {
        Router::new()
            .route("/", get(etf_info))
            .route("/etfInfo", get(etf_info))
            .with_state(client)
    }
}
