//! HTTP boundary: webhook intake, seed endpoint, and the polling API.
//!
//! Request handling is split from the socket loop so the routing logic can
//! be exercised directly in tests: [`handle_request`] is a pure function of
//! the request and the injected store.

use crate::core::error::{RepowatchError, Result};
use crate::core::events::sample_records;
use crate::core::format::format_events;
use crate::core::normalize::{normalize, NormalizeError};
use crate::storage::event_store::EventStore;
use serde::Serialize;

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Options,
}

impl ApiMethod {
    fn from_http(method: &tiny_http::Method) -> Option<Self> {
        match method {
            tiny_http::Method::Get => Some(Self::Get),
            tiny_http::Method::Post => Some(Self::Post),
            tiny_http::Method::Options => Some(Self::Options),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub extra_headers: Vec<tiny_http::Header>,
}

impl ApiResponse {
    fn json<T: Serialize>(status_code: u16, value: &T) -> Result<Self> {
        let body = serde_json::to_vec_pretty(value).map_err(|e| {
            RepowatchError::system("json_serialize_failed", e.to_string(), "server:json")
        })?;
        Ok(Self {
            status_code,
            content_type: "application/json",
            body,
            extra_headers: cors_headers(),
        })
    }

    fn text(status_code: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            content_type,
            body: body.into(),
            extra_headers: cors_headers(),
        }
    }

    /// Responds with the `{"message": ...}` body shape all write endpoints
    /// and client errors use.
    fn message(status_code: u16, message: &str) -> Result<Self> {
        Self::json(status_code, &serde_json::json!({ "message": message }))
    }
}

/// The page is a projection of `/events`; it holds no state of its own.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Repository events</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    li { margin: 0.5rem 0; }
  </style>
</head>
<body>
  <h1>Repository events</h1>
  <ul id="events"></ul>
  <script>
    async function poll() {
      const res = await fetch('/events');
      const messages = await res.json();
      const list = document.getElementById('events');
      list.innerHTML = '';
      for (const message of messages) {
        const item = document.createElement('li');
        item.textContent = message;
        list.appendChild(item);
      }
    }
    poll();
    setInterval(poll, 15000);
  </script>
</body>
</html>
"#;

fn cors_headers() -> Vec<tiny_http::Header> {
    vec![
        tiny_http::Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..])
            .expect("static header"),
        tiny_http::Header::from_bytes(
            &b"Access-Control-Allow-Methods"[..],
            &b"GET, POST, OPTIONS"[..],
        )
        .expect("static header"),
        tiny_http::Header::from_bytes(&b"Access-Control-Allow-Headers"[..], &b"Content-Type"[..])
            .expect("static header"),
    ]
}

fn parse_json_body(body: Option<&[u8]>) -> std::result::Result<serde_json::Value, String> {
    let raw = body.ok_or_else(|| "Request body is required".to_string())?;
    serde_json::from_slice(raw).map_err(|e| format!("Invalid JSON body: {e}"))
}

fn method_not_allowed(path: &str, method: ApiMethod, allowed: &'static str) -> Result<ApiResponse> {
    ApiResponse::message(
        405,
        &format!("Method '{method:?}' is not allowed for '{path}'; use {allowed}"),
    )
}

fn handle_webhook(body: Option<&[u8]>, store: &dyn EventStore) -> Result<ApiResponse> {
    let payload = match parse_json_body(body) {
        Ok(payload) => payload,
        Err(message) => return ApiResponse::message(400, &message),
    };

    match normalize(&payload) {
        Ok(record) => {
            store.append(record);
            ApiResponse::message(201, "Event saved successfully")
        }
        Err(NormalizeError::UnsupportedEvent) => ApiResponse::message(400, "Unsupported event"),
        Err(err) => ApiResponse::message(400, &format!("Malformed event: {err}")),
    }
}

fn handle_test_data(store: &dyn EventStore) -> Result<ApiResponse> {
    for record in sample_records() {
        store.append(record);
    }
    ApiResponse::message(200, "Test data added")
}

fn handle_events(store: &dyn EventStore) -> Result<ApiResponse> {
    ApiResponse::json(200, &format_events(store.snapshot()))
}

/// Routes one request against the store.
///
/// # Errors
/// Only serialization of a response body can fail; every payload-level
/// problem is answered with a 4xx response instead.
pub fn handle_request(
    method: ApiMethod,
    url: &str,
    body: Option<&[u8]>,
    store: &dyn EventStore,
) -> Result<ApiResponse> {
    if method == ApiMethod::Options {
        return Ok(ApiResponse::text(204, "text/plain", ""));
    }

    let (path, _qs) = url.split_once('?').unwrap_or((url, ""));

    match path {
        "/" if method == ApiMethod::Get => Ok(ApiResponse::text(200, "text/html", INDEX_HTML)),
        "/health" if method == ApiMethod::Get => Ok(ApiResponse::text(200, "text/plain", "ok\n")),
        "/webhook" if method == ApiMethod::Post => handle_webhook(body, store),
        "/test-data" if method == ApiMethod::Post => handle_test_data(store),
        "/events" if method == ApiMethod::Get => handle_events(store),
        "/" | "/health" | "/events" => method_not_allowed(path, method, "GET"),
        "/webhook" | "/test-data" => method_not_allowed(path, method, "POST"),
        _ => ApiResponse::message(404, &format!("Unknown endpoint '{path}'")),
    }
}

/// Runs the blocking HTTP loop until the process exits.
///
/// # Errors
/// Returns an error if the socket cannot be bound.
pub fn serve(config: &ServeConfig, store: &dyn EventStore) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let server = tiny_http::Server::http(&addr).map_err(|e| {
        RepowatchError::system("server_bind_failed", e.to_string(), "server:serve")
    })?;

    eprintln!("repowatch listening on http://{addr}");

    for mut req in server.incoming_requests() {
        let Some(method) = ApiMethod::from_http(req.method()) else {
            let _ = req.respond(tiny_http::Response::empty(405));
            continue;
        };

        let mut request_body = Vec::new();
        if method == ApiMethod::Post {
            let _ = req.as_reader().read_to_end(&mut request_body);
        }

        let response = match handle_request(
            method,
            req.url(),
            if request_body.is_empty() {
                None
            } else {
                Some(request_body.as_slice())
            },
            store,
        ) {
            Ok(r) => r,
            Err(_) => ApiResponse::message(500, "Internal server error")
                .unwrap_or_else(|_| ApiResponse::text(500, "text/plain", "internal error\n")),
        };

        let mut tiny = tiny_http::Response::from_data(response.body)
            .with_status_code(response.status_code)
            .with_header(
                tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    response.content_type.as_bytes(),
                )
                .expect("content-type header"),
            );

        for h in response.extra_headers {
            tiny = tiny.with_header(h);
        }

        let _ = req.respond(tiny);
    }

    Ok(())
}
