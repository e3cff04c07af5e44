// File: src/parsers/mod.rs

pub mod clf;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub use clf::{parse, parse_bytes};

/// The HTTP verbs a request line may carry. Lookup is case-sensitive:
/// CLF request lines use uppercase verbs and anything else is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

impl HttpMethod {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "PATCH" => Some(Self::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
        }
    }
}

/// The HTTP protocol versions a request line may carry, matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpProtocol {
    #[serde(rename = "HTTP/0.9")]
    V0_9,
    #[serde(rename = "HTTP/1.0")]
    V1_0,
    #[serde(rename = "HTTP/1.1")]
    V1_1,
    #[serde(rename = "HTTP/2.0")]
    V2_0,
    #[serde(rename = "HTTP/3.0")]
    V3_0,
}

impl HttpProtocol {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "HTTP/0.9" => Some(Self::V0_9),
            "HTTP/1.0" => Some(Self::V1_0),
            "HTTP/1.1" => Some(Self::V1_1),
            "HTTP/2.0" => Some(Self::V2_0),
            "HTTP/3.0" => Some(Self::V3_0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V0_9 => "HTTP/0.9",
            Self::V1_0 => "HTTP/1.0",
            Self::V1_1 => "HTTP/1.1",
            Self::V2_0 => "HTTP/2.0",
            Self::V3_0 => "HTTP/3.0",
        }
    }
}

/// The decomposed request sub-line from between the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<String>,
    pub protocol: HttpProtocol,
}

impl ParsedRequest {
    /// The resource identifier this request targets: the path plus the
    /// query string when one is present. Reports aggregate on this.
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// One fully parsed CLF record. Built once by the parser from a single
/// input line and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// The client host that made the request.
    pub host: String,
    /// The client's identity (usually "-").
    pub identity: String,
    /// The userid of the person requesting the document (usually "-").
    pub user: String,
    /// When the request was received, at the offset the server logged.
    pub time: DateTime<FixedOffset>,
    /// The parsed request line received from the client.
    pub request: ParsedRequest,
    /// The three-digit http status code returned to the client.
    pub status: String,
    /// Size of the object returned, in bytes. `None` only under the
    /// size-less grammar variant.
    pub size: Option<u64>,
}
