//! Text-format graph reader.
//!
//! The format is line oriented:
//!
//! ```text
//! / comment lines start with the comment marker
//! triangle
//! a -- b 3
//! b -- c
//! c -- a 2
//! lonely
//! ```
//!
//! The first meaningful line is the graph name. Every following line is a
//! single vertex name or an edge `a -- b` with an optional non-negative
//! weight. Blank lines and comment lines are skipped anywhere. Input must be
//! UTF-8; a line that is not fails with its line number.

mod line;

pub use line::{EDGE_SEPARATOR, Line, parse_line};

use grafo_common::types::{DEFAULT_WEIGHT, Weight};
use grafo_common::utils::error::{Error, ParseError, ParseErrorKind, Result};
use grafo_core::graph::{Graph, GraphConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Configuration for [`GraphReader`].
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Lines starting with this character are ignored.
    pub comment_marker: char,
    /// Longest accepted line, in bytes, excluding the line terminator.
    pub max_line_length: usize,
    /// Weight for edges written without one.
    pub default_weight: Weight,
    /// Compute every analysis before returning the graph.
    pub eager_analysis: bool,
    /// Configuration for the graph being built.
    pub graph: GraphConfig,
}

impl ReaderConfig {
    /// Sets the comment marker.
    #[must_use]
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn with_max_line_length(mut self, bytes: usize) -> Self {
        self.max_line_length = bytes;
        self
    }

    /// Sets the default edge weight.
    #[must_use]
    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// Enables or disables analysis at load time.
    #[must_use]
    pub fn with_eager_analysis(mut self, eager: bool) -> Self {
        self.eager_analysis = eager;
        self
    }

    /// Sets the graph configuration.
    #[must_use]
    pub fn with_graph_config(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comment_marker: '/',
            max_line_length: 2048,
            default_weight: DEFAULT_WEIGHT,
            eager_analysis: true,
            graph: GraphConfig::default(),
        }
    }
}

/// Builds a [`Graph`] from its text description.
#[derive(Debug, Clone, Default)]
pub struct GraphReader {
    config: ReaderConfig,
}

impl GraphReader {
    /// Creates a reader with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with a custom configuration.
    #[must_use]
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads a whole graph description.
    ///
    /// Nothing is returned on failure; a malformed line discards the graph
    /// built so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed input, [`Error::Io`] if the
    /// source cannot be read, and an allocation error if the graph cannot
    /// grow.
    pub fn read(&self, input: impl BufRead) -> Result<Graph> {
        let mut lines = input.lines().enumerate().map(|(index, text)| (index + 1, text));

        let (_, name) = self.next_line(&mut lines)?.ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MissingGraphName,
                0,
                "input has no graph name line",
            )
        })?;
        let mut graph = Graph::with_config(name.trim(), self.config.graph.clone())?;

        let mut vertex_lines = 0usize;
        let mut edge_lines = 0usize;
        while let Some((line, text)) = self.next_line(&mut lines)? {
            match parse_line(&text, line, self.config.default_weight)? {
                Line::Vertex(name) => {
                    graph.insert_vertex(name)?;
                    vertex_lines += 1;
                }
                Line::Edge { from, to, weight } => {
                    graph.insert_edge(from, to, weight)?;
                    edge_lines += 1;
                }
            }
        }

        debug!(
            name = graph.name(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            vertex_lines,
            edge_lines,
            "graph loaded"
        );

        if self.config.eager_analysis {
            graph.analyze()?;
        }

        Ok(graph)
    }

    /// Reads a graph description held in memory.
    ///
    /// # Errors
    ///
    /// See [`GraphReader::read`].
    pub fn read_str(&self, text: &str) -> Result<Graph> {
        self.read(text.as_bytes())
    }

    /// Reads a graph description from a file.
    ///
    /// # Errors
    ///
    /// See [`GraphReader::read`].
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading graph file");
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Returns the next line that is neither blank nor a comment.
    fn next_line<I>(&self, lines: &mut I) -> Result<Option<(usize, String)>>
    where
        I: Iterator<Item = (usize, io::Result<String>)>,
    {
        for (line, text) in lines {
            let text = text.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => Error::from(ParseError::new(
                    ParseErrorKind::InvalidEncoding,
                    line,
                    "line is not valid UTF-8",
                )),
                _ => Error::Io(e),
            })?;
            if text.len() > self.config.max_line_length {
                return Err(ParseError::new(
                    ParseErrorKind::LineTooLong,
                    line,
                    format!(
                        "{} bytes exceeds the limit of {}",
                        text.len(),
                        self.config.max_line_length
                    ),
                )
                .into());
            }
            if text.starts_with(self.config.comment_marker) || text.trim().is_empty() {
                continue;
            }
            return Ok(Some((line, text)));
        }
        Ok(None)
    }
}

/// Reads a graph with the default configuration.
///
/// # Errors
///
/// See [`GraphReader::read`].
pub fn read_graph(input: impl BufRead) -> Result<Graph> {
    GraphReader::new().read(input)
}

/// Reads a graph from a string with the default configuration.
///
/// # Errors
///
/// See [`GraphReader::read`].
pub fn read_graph_from_str(text: &str) -> Result<Graph> {
    GraphReader::new().read_str(text)
}

/// Reads a graph file with the default configuration.
///
/// # Errors
///
/// See [`GraphReader::read`].
pub fn read_graph_from_path(path: impl AsRef<Path>) -> Result<Graph> {
    GraphReader::new().read_path(path)
}
