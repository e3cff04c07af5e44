// File: src/parsers/clf.rs

use super::{HttpMethod, HttpProtocol, LogRecord, ParsedRequest};
use crate::error::Error;
use crate::grammar::{self, LogFormat};
use crate::time;

/// Parses a single CLF record into a typed [`LogRecord`].
///
/// The whole line must match the grammar of the chosen `format`: fields
/// out of order, a timestamp missing its brackets, an unknown request
/// method or protocol, or a non-numeric size all fail with the same
/// [`Error::Parse`] kind, carrying the format name and the offending line.
pub fn parse(format: LogFormat, line: &str) -> Result<LogRecord, Error> {
    let caps = format
        .line_regex()
        .captures(line)
        .ok_or_else(|| parse_error(format, line))?;

    let time = time::parse_clf_date(&caps["time"]).map_err(|_| parse_error(format, line))?;
    let request = parse_request(&caps["request"]).ok_or_else(|| parse_error(format, line))?;

    let size = if format.has_size() {
        let raw = &caps["size"];
        Some(raw.parse::<u64>().map_err(|_| parse_error(format, line))?)
    } else {
        None
    };

    Ok(LogRecord {
        host: caps["host"].to_string(),
        identity: caps["identity"].to_string(),
        user: caps["user"].to_string(),
        time,
        request,
        status: caps["status"].to_string(),
        size,
    })
}

/// Byte-level entry point for callers reading raw file or socket data.
/// Input that is not text is a caller error, reported as
/// [`Error::Contract`] rather than a parse failure.
pub fn parse_bytes(format: LogFormat, raw: &[u8]) -> Result<LogRecord, Error> {
    let line = std::str::from_utf8(raw)
        .map_err(|_| Error::Contract("log input must be valid UTF-8 text".to_string()))?;
    parse(format, line)
}

/// Decomposes the quoted request sub-line. The method and protocol are
/// validated against their enumerated sets here, so the master pattern
/// never has to embed every valid verb.
fn parse_request(req: &str) -> Option<ParsedRequest> {
    let caps = grammar::request_regex().captures(req)?;
    let method = HttpMethod::from_token(&caps["method"])?;
    let protocol = HttpProtocol::from_token(&caps["protocol"])?;

    Some(ParsedRequest {
        method,
        path: caps["path"].to_string(),
        query: caps.name("query").map(|m| m.as_str().to_string()),
        protocol,
    })
}

fn parse_error(format: LogFormat, line: &str) -> Error {
    Error::Parse {
        format: format.name(),
        line: line.to_string(),
    }
}
