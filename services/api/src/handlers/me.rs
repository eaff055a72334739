use axum::{
    Json,
    body::Bytes,
    extract::{OriginalUri, Query},
    http::{HeaderMap, Method},
};
use serde::Serialize;
use serde_json::{Map, Value};

// ── GET|POST /v1/me ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EchoedRequest {
    pub method: String,
    pub url: String,
    pub path: String,
    pub query: Map<String, Value>,
    pub headers: Map<String, Value>,
    pub body: Value,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub name: Option<String>,
    pub request: EchoedRequest,
}

/// Echoes the incoming request. Handy for checking what a proxy forwards.
pub async fn me(
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<MeResponse> {
    let name = pairs
        .iter()
        .find(|(k, _)| k == "name")
        .map(|(_, v)| v.clone());

    let query = group(pairs);
    let headers = group(headers.iter().map(|(k, v)| {
        (
            k.as_str().to_owned(),
            String::from_utf8_lossy(v.as_bytes()).into_owned(),
        )
    }));

    Json(MeResponse {
        name,
        request: EchoedRequest {
            method: method.to_string(),
            url: uri.to_string(),
            path: uri.path().to_owned(),
            query,
            headers,
            body: echo_body(&body),
        },
    })
}

/// Collect pairs into an object. A key seen more than once becomes an array.
fn group(pairs: impl IntoIterator<Item = (String, String)>) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in pairs {
        match map.get_mut(&key) {
            None => {
                map.insert(key, Value::String(value));
            }
            Some(Value::Array(items)) => items.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        }
    }
    map
}

/// JSON bodies echo as parsed JSON, other bodies as text, empty as null.
fn echo_body(body: &Bytes) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
