/// Classification of a line fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Handed to the notation renderer.
    Notation,
    /// Displayed verbatim.
    Literal,
    /// Never produced by [`tokenize`]; renderers report it as an error.
    Unknown,
}

/// One fragment of a content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub value: String,
}

impl Segment {
    pub fn notation(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Notation,
            value: value.into(),
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Literal,
            value: value.into(),
        }
    }
}

/// Kind of the piece at `index` after splitting on the separator.
///
/// Even pieces are notation, odd pieces sit between a pair of separators and
/// are literal. Content is never inspected.
pub fn kind_at(index: usize) -> SegmentKind {
    if index % 2 == 1 {
        SegmentKind::Literal
    } else {
        SegmentKind::Notation
    }
}

/// Splits `line` on every occurrence of `separator` into classified segments.
///
/// Zero-length pieces are dropped after classification, so they still count
/// toward the parity of the pieces that follow. Whitespace-only pieces are kept.
pub fn tokenize(line: &str, separator: &str) -> Vec<Segment> {
    if separator.is_empty() {
        // `str::split("")` yields every char; treat the line as unseparated.
        return if line.is_empty() {
            vec![]
        } else {
            vec![Segment::notation(line)]
        };
    }

    line.split(separator)
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .map(|(i, piece)| Segment {
            kind: kind_at(i),
            value: piece.to_string(),
        })
        .collect()
}
