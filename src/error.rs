// File: src/error.rs

use std::fmt;

/// Every failure this crate can report, as one closed set so callers
/// can branch on the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller misuse (e.g. handing the parser bytes that are not text).
    /// Distinct from `Parse` so "bad caller" never looks like "bad log".
    Contract(String),
    /// The line, or its embedded request sub-line, did not match the
    /// grammar, or a captured field failed semantic conversion.
    Parse {
        format: &'static str,
        line: String,
    },
    /// A status code that is neither a success nor a failure pattern.
    Status(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Contract(msg) => write!(f, "Contract violation: {}", msg),
            Error::Parse { format, line } => {
                write!(f, "Could not parse the log of type [{}]: {}", format, line)
            }
            Error::Status(code) => write!(f, "Unidentifiable http status code: {}", code),
        }
    }
}

impl std::error::Error for Error {}
