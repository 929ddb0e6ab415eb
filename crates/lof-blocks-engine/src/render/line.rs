use crate::parsing::segment::{Segment, SegmentKind};

use super::types::{
    LineTokenizer, NotationRenderer, RenderedLine, RenderedSegment, SegmentError,
};

/// Renders one segment.
///
/// `is_last` marks the final segment of its line, which places literal text
/// on the right.
pub fn render_segment<R: NotationRenderer + ?Sized>(
    segment: &Segment,
    is_last: bool,
    renderer: &R,
) -> Result<RenderedSegment, SegmentError> {
    match segment.kind {
        SegmentKind::Notation => Ok(RenderedSegment::Expression(
            renderer.render(&segment.value)?,
        )),
        SegmentKind::Literal => Ok(RenderedSegment::Text {
            text: segment.value.clone(),
            place_right: is_last,
        }),
        SegmentKind::Unknown => Err(SegmentError::UnknownSegmentKind {
            value: segment.value.clone(),
        }),
    }
}

/// Tokenizes `line` and renders every segment.
///
/// A failing segment becomes an inline error; its siblings still render.
pub fn render_line<T, R>(line: &str, separator: &str, tokenizer: &T, renderer: &R) -> RenderedLine
where
    T: LineTokenizer + ?Sized,
    R: NotationRenderer + ?Sized,
{
    let segments = tokenizer.tokenize(line, separator);
    if segments.is_empty() {
        return RenderedLine::Blank;
    }

    let last = segments.len() - 1;
    RenderedLine::Segments(
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                render_segment(segment, i == last, renderer)
                    .unwrap_or_else(|e| RenderedSegment::Error(e.to_string()))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::{NotationSyntaxError, SeparatorTokenizer};
    use pretty_assertions::assert_eq;

    /// Accepts only balanced parentheses and echoes the input.
    fn balanced(notation: &str) -> Result<String, NotationSyntaxError> {
        let mut depth = 0i32;
        for c in notation.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Err(NotationSyntaxError::new("unexpected )"));
            }
        }
        if depth != 0 {
            return Err(NotationSyntaxError::new("expected )"));
        }
        Ok(format!("<{notation}>"))
    }

    #[test]
    fn renders_expressions_and_text() {
        let line = render_line("((a))::=::()", "::", &SeparatorTokenizer, &balanced);
        assert_eq!(
            line,
            RenderedLine::Segments(vec![
                RenderedSegment::Expression("<((a))>".to_string()),
                RenderedSegment::Text {
                    text: "=".to_string(),
                    place_right: false,
                },
                RenderedSegment::Expression("<()>".to_string()),
            ])
        );
    }

    #[test]
    fn trailing_text_is_placed_right() {
        let line = render_line("()::note", "::", &SeparatorTokenizer, &balanced);
        assert_eq!(
            line,
            RenderedLine::Segments(vec![
                RenderedSegment::Expression("<()>".to_string()),
                RenderedSegment::Text {
                    text: "note".to_string(),
                    place_right: true,
                },
            ])
        );
    }

    #[test]
    fn syntax_error_is_scoped_to_its_segment() {
        let line = render_line("(()::=::()", "::", &SeparatorTokenizer, &balanced);
        assert_eq!(
            line,
            RenderedLine::Segments(vec![
                RenderedSegment::Error("expected )".to_string()),
                RenderedSegment::Text {
                    text: "=".to_string(),
                    place_right: false,
                },
                RenderedSegment::Expression("<()>".to_string()),
            ])
        );
    }

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(
            render_line("", "::", &SeparatorTokenizer, &balanced),
            RenderedLine::Blank
        );
        assert_eq!(
            render_line("::", "::", &SeparatorTokenizer, &balanced),
            RenderedLine::Blank
        );
    }

    #[test]
    fn unknown_kind_from_substituted_tokenizer_is_an_error() {
        let broken = |line: &str, _: &str| {
            vec![Segment {
                kind: SegmentKind::Unknown,
                value: line.to_string(),
            }]
        };

        let line = render_line("lorem ipsum", "::", &broken, &balanced);

        assert_eq!(
            line,
            RenderedLine::Segments(vec![RenderedSegment::Error(
                "Unknown segment kind for \"lorem ipsum\"".to_string()
            )])
        );
    }

    #[test]
    fn render_segment_reports_syntax_error() {
        let err = render_segment(&Segment::notation(")("), false, &balanced).unwrap_err();
        assert_eq!(
            err,
            SegmentError::Syntax(NotationSyntaxError::new("unexpected )"))
        );
    }
}
