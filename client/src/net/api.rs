//! HTTP calls to the demand query service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. The error
//! string is already user-facing: non-2xx replies prefer the body's own
//! `message`/`error` fields, then the HTTP status text, then a generic
//! status line. Queries are raced against a client-side timeout so a hung
//! request cannot leave the input disabled forever.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{ChatResponse, QueryRequest};

/// Seconds a query may run before the client gives up on it.
#[cfg(any(test, feature = "hydrate"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Base URL of the query service. Override at build time via
/// `DEMANDBOARD_API_BASE` for non-local deployments.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("DEMANDBOARD_API_BASE").unwrap_or("http://localhost:5001")
}

#[cfg(any(test, feature = "hydrate"))]
fn query_endpoint() -> String {
    format!("{}/query", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn health_endpoint() -> String {
    format!("{}/health", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn server_error_message(status: u16) -> String {
    format!("Server error: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_message() -> String {
    format!("no response after {REQUEST_TIMEOUT_SECS} seconds")
}

/// User-facing message for a non-2xx reply whose body parsed as JSON.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &Value, status: u16) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map_or_else(|| server_error_message(status), str::to_owned)
}

/// User-facing message for a non-2xx reply whose body was not JSON.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_status(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        server_error_message(status)
    } else {
        status_text.to_owned()
    }
}

/// Probe `GET /health` once at startup. Returns the body for a log line.
///
/// # Errors
///
/// Returns an error string if the service is unreachable or the body is not
/// JSON. The caller surfaces this as a banner, never as a crash.
pub async fn check_health() -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&health_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Send a question to `POST /query`, bounded by a client-side timeout.
///
/// # Errors
///
/// Returns a user-facing error string if the HTTP request fails, the server
/// responds with a non-OK status, the reply is not valid JSON, or the
/// timeout elapses first.
pub async fn post_query(request: &QueryRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let call = Box::pin(send_query(request));
        let deadline = Box::pin(gloo_timers::future::sleep(
            std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ));
        match select(call, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(timeout_message()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn send_query(request: &QueryRequest) -> Result<ChatResponse, String> {
    let resp = gloo_net::http::Request::post(&query_endpoint())
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        let status = resp.status();
        return Err(match resp.json::<Value>().await {
            Ok(body) => error_message_from_body(&body, status),
            Err(_) => error_message_from_status(status, &resp.status_text()),
        });
    }

    resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
}
