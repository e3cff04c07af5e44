// File: src/grammar.rs

use regex::Regex;
use std::sync::OnceLock;

// Pattern fragments for the identifiable entities inside a log line.
const HOST: &str = r"(?P<host>\S+)";
const IDENTITY: &str = r"(?P<identity>\S+)";
const USER: &str = r"(?P<user>\S+)";
const TIME: &str = r"\[(?P<time>[^\]]+)\]";
const REQUEST: &str = r#""(?P<request>[^"]*)""#;
const STATUS: &str = r"(?P<status>\d{3})";
const SIZE: &str = r"(?P<size>\S+)";

// Fragments for the quoted request sub-line. The method is captured as a
// bare uppercase token and the path runs up to an optional `?query`;
// validating the method and protocol against their enumerated sets
// happens in the parser, not here.
const METHOD: &str = r"(?P<method>[A-Z]+)";
const PATH_QUERY: &str = r"(?P<path>[^?]+)(?:\?(?P<query>\S+))?";
const PROTOCOL: &str = r"(?P<protocol>\S+)";

/// The log line grammars this crate understands. The size-less variant
/// exists for legacy CLF emitters that drop the trailing byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Clf,
    ClfNoSize,
}

impl LogFormat {
    /// Human-readable format name, used in parse error messages.
    pub fn name(&self) -> &'static str {
        match self {
            LogFormat::Clf => "Common Log Format",
            LogFormat::ClfNoSize => "Common Log Format (no size)",
        }
    }

    /// Whether this grammar captures the trailing response size field.
    pub fn has_size(&self) -> bool {
        matches!(self, LogFormat::Clf)
    }

    /// The compiled top-level line pattern, anchored at the start.
    /// Compiled once per variant.
    pub(crate) fn line_regex(&self) -> &'static Regex {
        static CLF: OnceLock<Regex> = OnceLock::new();
        static CLF_NO_SIZE: OnceLock<Regex> = OnceLock::new();

        match self {
            LogFormat::Clf => CLF.get_or_init(|| {
                compile(&format!(
                    r"^{HOST}\s{IDENTITY}\s{USER}\s{TIME}\s{REQUEST}\s{STATUS}\s{SIZE}"
                ))
            }),
            LogFormat::ClfNoSize => CLF_NO_SIZE.get_or_init(|| {
                compile(&format!(
                    r"^{HOST}\s{IDENTITY}\s{USER}\s{TIME}\s{REQUEST}\s{STATUS}"
                ))
            }),
        }
    }
}

/// The compiled request sub-line pattern, shared by every line grammar.
pub(crate) fn request_regex() -> &'static Regex {
    static REQUEST_LINE: OnceLock<Regex> = OnceLock::new();
    REQUEST_LINE.get_or_init(|| compile(&format!(r"^{METHOD}\s{PATH_QUERY}\s{PROTOCOL}")))
}

/// Anchored pattern for status codes counted as successes (2xx/3xx).
pub(crate) fn success_status_regex() -> &'static Regex {
    static SUCCESS: OnceLock<Regex> = OnceLock::new();
    SUCCESS.get_or_init(|| compile(r"^[23]\d\d$"))
}

/// Anchored pattern for status codes counted as failures (1xx/4xx/5xx).
pub(crate) fn fail_status_regex() -> &'static Regex {
    static FAIL: OnceLock<Regex> = OnceLock::new();
    FAIL.get_or_init(|| compile(r"^[145]\d\d$"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid grammar pattern")
}
