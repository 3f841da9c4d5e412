//! Line-oriented JSON transport for commands
//!
//! Each request is one JSON object per line:
//! `{"id": 1, "cmd": "search_content", "args": {"query": "ai"}}`.
//! Each response echoes the request id and carries either `ok` with the
//! command result or `error` with a human-readable message.

use crate::app::AppState;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

fn malformed(reason: impl std::fmt::Display) -> String {
    tracing::warn!("Malformed request: {}", reason);
    json!({ "id": Value::Null, "error": format!("Malformed request: {}", reason) }).to_string()
}

/// Handle one raw input line, which may not be valid UTF-8
pub async fn handle_bytes(state: &AppState, line: &[u8]) -> String {
    match std::str::from_utf8(line) {
        Ok(line) => handle_line(state, line).await,
        Err(e) => malformed(e),
    }
}

/// Handle one request line and render the response line
pub async fn handle_line(state: &AppState, line: &str) -> String {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => return malformed(e),
    };

    match super::invoke(state, &request.cmd, request.args).await {
        Ok(value) => json!({ "id": request.id, "ok": value }).to_string(),
        Err(e) => {
            tracing::debug!("Command {} failed: {}", request.cmd, e);
            json!({ "id": request.id, "error": e }).to_string()
        }
    }
}
