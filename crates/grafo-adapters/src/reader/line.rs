//! Classification of a single body line.

use grafo_common::types::Weight;
use grafo_common::utils::error::{ParseError, ParseErrorKind};

/// Token separating the endpoints of an edge line.
pub const EDGE_SEPARATOR: &str = "--";

/// A parsed body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A lone vertex name.
    Vertex(&'a str),
    /// An edge with its weight, the default already applied.
    Edge {
        /// First endpoint.
        from: &'a str,
        /// Second endpoint.
        to: &'a str,
        /// Edge weight.
        weight: Weight,
    },
}

/// Parses one non-comment, non-blank line.
///
/// Accepted forms are `<name>` and `<a> -- <b> [weight]`, tokens separated
/// by any run of whitespace.
pub fn parse_line(
    text: &str,
    line: usize,
    default_weight: Weight,
) -> Result<Line<'_>, ParseError> {
    let mut tokens = text.split_whitespace();
    let first = tokens
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidEdge, line, "empty line"))?;

    let Some(separator) = tokens.next() else {
        if first == EDGE_SEPARATOR {
            return Err(ParseError::new(
                ParseErrorKind::InvalidEdge,
                line,
                "edge separator without endpoints",
            ));
        }
        return Ok(Line::Vertex(first));
    };

    if separator != EDGE_SEPARATOR {
        return Err(ParseError::new(
            ParseErrorKind::InvalidEdge,
            line,
            format!("expected '{EDGE_SEPARATOR}' after '{first}', found '{separator}'"),
        ));
    }

    let to = tokens.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidEdge,
            line,
            format!("edge from '{first}' has no second endpoint"),
        )
    })?;

    if first == EDGE_SEPARATOR || to == EDGE_SEPARATOR {
        return Err(ParseError::new(
            ParseErrorKind::InvalidEdge,
            line,
            "edge separator used as a vertex name",
        ));
    }

    let weight = match tokens.next() {
        None => default_weight,
        Some(raw) => raw.parse::<Weight>().map_err(|_| {
            ParseError::new(
                ParseErrorKind::InvalidWeight,
                line,
                format!("'{raw}' is not a non-negative integer weight"),
            )
        })?,
    };

    if let Some(extra) = tokens.next() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidEdge,
            line,
            format!("unexpected token '{extra}' after weight"),
        ));
    }

    if first == to {
        return Err(ParseError::new(
            ParseErrorKind::SelfLoop,
            line,
            format!("edge from '{first}' to itself"),
        ));
    }

    Ok(Line::Edge {
        from: first,
        to,
        weight,
    })
}
