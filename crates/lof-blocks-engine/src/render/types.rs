use thiserror::Error;

use crate::parameters::ParameterSet;
use crate::parsing::segment::{Segment, tokenize};

/// Raised by a notation renderer for text that is not valid bracket notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotationSyntaxError {
    pub message: String,
}

impl NotationSyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a single segment could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Syntax(#[from] NotationSyntaxError),
    #[error("Unknown segment kind for {value:?}")]
    UnknownSegmentKind { value: String },
}

/// Parses and renders bracket notation.
///
/// Implementations validate first and only produce output for valid input.
pub trait NotationRenderer {
    fn render(&self, notation: &str) -> Result<String, NotationSyntaxError>;
}

impl<F> NotationRenderer for F
where
    F: Fn(&str) -> Result<String, NotationSyntaxError>,
{
    fn render(&self, notation: &str) -> Result<String, NotationSyntaxError> {
        self(notation)
    }
}

/// Splits a content line into segments.
pub trait LineTokenizer {
    fn tokenize(&self, line: &str, separator: &str) -> Vec<Segment>;
}

impl<F> LineTokenizer for F
where
    F: Fn(&str, &str) -> Vec<Segment>,
{
    fn tokenize(&self, line: &str, separator: &str) -> Vec<Segment> {
        self(line, separator)
    }
}

/// The positional separator split from [`crate::parsing::tokenize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorTokenizer;

impl LineTokenizer for SeparatorTokenizer {
    fn tokenize(&self, line: &str, separator: &str) -> Vec<Segment> {
        tokenize(line, separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedSegment {
    /// Renderer output for a notation segment.
    Expression(String),
    /// Literal text. `place_right` is set on the last segment of a line.
    Text { text: String, place_right: bool },
    /// Inline error in place of a segment that failed.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    /// A line without segments, shown as a line break.
    Blank,
    Segments(Vec<RenderedSegment>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Parameters the block was rendered with.
    pub parameters: ParameterSet,
    /// Set when the header could not be read; the defaults were used instead.
    pub header_error: Option<String>,
    pub lines: Vec<RenderedLine>,
}
