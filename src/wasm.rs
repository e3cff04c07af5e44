use wasm_bindgen::prelude::*;

use crate::grammar::LogFormat;
use crate::parsers::{self, LogRecord};

// This struct helps the JavaScript frontend understand the result easily.
// We derive Serialize so we can return it as a JSON string.
#[derive(serde::Serialize)]
struct WasmResult {
    ok: bool,
    record: Option<LogRecord>, // The structured record when parsing succeeded
    error: Option<String>,     // The parse diagnostics otherwise
}

#[wasm_bindgen]
pub fn parse_line(log_line: &str) -> String {
    let result = match parsers::parse(LogFormat::Clf, log_line) {
        Ok(record) => WasmResult {
            ok: true,
            record: Some(record),
            error: None,
        },
        Err(e) => WasmResult {
            ok: false,
            record: None,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_string(&result).unwrap_or_default()
}
