//! Network fetching utilities with timeout support.
//!
//! Every request races the Fetch API promise against `FETCH_TIMEOUT_MS`; a
//! request that loses the race is reported as [`FetchError::Timeout`] and its
//! eventual response is dropped.

use js_sys::{Array, Promise, Uint8Array};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined, which is how the timeout is told apart
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// HTTP methods used by the directory client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = send_request(Method::Get, url, None).await?;
    let text = read_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Send `body` as JSON. The response body is ignored.
pub async fn send_json<B: Serialize>(method: Method, url: &str, body: &B) -> Result<(), FetchError> {
    let json = serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;
    send_request(method, url, Some(json)).await.map(drop)
}

/// Send a bodiless request. The response body is ignored.
pub async fn send(method: Method, url: &str) -> Result<(), FetchError> {
    send_request(method, url, None).await.map(drop)
}

/// Fetch raw bytes with the response's `Content-Type`.
pub async fn fetch_bytes(url: &str) -> Result<(Vec<u8>, String), FetchError> {
    let resp = send_request(Method::Get, url, None).await?;
    let mime = resp
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let buffer = JsFuture::from(resp.array_buffer().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok((Uint8Array::new(&buffer).to_vec(), mime))
}

/// Issue a request through the Fetch API with timeout.
///
/// Non-2xx responses become [`FetchError::HttpError`].
async fn send_request(
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = body {
        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }
            Ok(resp)
        }
    }
}

async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
