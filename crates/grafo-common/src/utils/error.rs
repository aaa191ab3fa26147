//! Error types for Grafo.
//!
//! Library crates return [`Result`]; the command-line binary wraps these in
//! `anyhow` at the top level.

use std::fmt;

/// Result type alias for Grafo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The graph description could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A growable table could not be extended.
    #[error("allocation failed while growing {what} by {requested} entries")]
    AllocationFailed {
        /// The table that failed to grow.
        what: &'static str,
        /// Number of additional entries requested.
        requested: usize,
    },

    /// An edge from a vertex to itself was inserted.
    #[error("self-loop on vertex '{0}' is not supported")]
    SelfLoop(String),

    /// The vertex table is full.
    #[error("graph cannot hold more than {0} vertices")]
    TooManyVertices(usize),

    /// I/O error while reading a graph description.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates an allocation failure for the given table.
    #[must_use]
    pub fn allocation(what: &'static str, requested: usize) -> Self {
        Self::AllocationFailed { what, requested }
    }

    /// Returns the parse error if this is one.
    #[must_use]
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// A malformed graph description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// One-based line number in the input, or 0 when not tied to a line.
    pub line: usize,
    /// Human-readable detail.
    pub message: String,
}

impl ParseError {
    /// Creates a parse error at the given line.
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{} at line {}: {}", self.kind, self.line, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input has no graph name line.
    MissingGraphName,
    /// A line is neither a vertex nor an `a -- b [weight]` edge.
    InvalidEdge,
    /// The edge weight is not a non-negative integer.
    InvalidWeight,
    /// The edge connects a vertex to itself.
    SelfLoop,
    /// The line exceeds the configured maximum length.
    LineTooLong,
    /// The line is not valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingGraphName => "missing graph name",
            Self::InvalidEdge => "malformed line",
            Self::InvalidWeight => "invalid weight",
            Self::SelfLoop => "self-loop",
            Self::LineTooLong => "line too long",
            Self::InvalidEncoding => "invalid UTF-8",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::InvalidWeight, 4, "expected integer, got 'x'");
        assert_eq!(
            err.to_string(),
            "invalid weight at line 4: expected integer, got 'x'"
        );

        let err = ParseError::new(ParseErrorKind::MissingGraphName, 0, "input is empty");
        assert_eq!(err.to_string(), "missing graph name: input is empty");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = ParseError::new(ParseErrorKind::InvalidEdge, 2, "x").into();
        assert_eq!(err.as_parse().map(|p| p.kind), Some(ParseErrorKind::InvalidEdge));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.as_parse().is_none());
    }

    #[test]
    fn test_allocation_error_display() {
        let err = Error::allocation("vertex table", 36);
        assert_eq!(
            err.to_string(),
            "allocation failed while growing vertex table by 36 entries"
        );
    }
}
