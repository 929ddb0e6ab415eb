use crate::parameters::ParameterSet;
use crate::parsing::header::{LOF_KEYWORD, SectionInfo, extract_block_parameters};

use super::line::render_line;
use super::types::{
    LineTokenizer, NotationRenderer, RenderedBlock, SeparatorTokenizer,
};

/// Renders whole blocks with a fixed tokenizer and notation renderer.
#[derive(Debug, Clone)]
pub struct BlockRenderer<R, T = SeparatorTokenizer> {
    keyword: String,
    renderer: R,
    tokenizer: T,
}

impl<R: NotationRenderer> BlockRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            keyword: LOF_KEYWORD.to_string(),
            renderer,
            tokenizer: SeparatorTokenizer,
        }
    }
}

impl<R: NotationRenderer, T: LineTokenizer> BlockRenderer<R, T> {
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_tokenizer<U: LineTokenizer>(self, tokenizer: U) -> BlockRenderer<R, U> {
        BlockRenderer {
            keyword: self.keyword,
            renderer: self.renderer,
            tokenizer,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Renders `body` line by line.
    ///
    /// The header is resolved against `defaults`. If that fails the block is
    /// still rendered with `defaults` and the failure is kept as
    /// [`RenderedBlock::header_error`].
    pub fn render(
        &self,
        body: &str,
        section: Option<SectionInfo<'_>>,
        defaults: &ParameterSet,
    ) -> RenderedBlock {
        let (parameters, header_error) =
            match extract_block_parameters(section, &self.keyword, defaults) {
                Ok(parameters) => (parameters, None),
                Err(e) => {
                    log::error!("error while parsing block parameters: {e}");
                    (defaults.clone(), Some(e.to_string()))
                }
            };

        let lines = body
            .split('\n')
            .map(|line| {
                render_line(
                    line,
                    &parameters.separator,
                    &self.tokenizer,
                    &self.renderer,
                )
            })
            .collect();

        RenderedBlock {
            parameters,
            header_error,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::segment::Segment;
    use crate::render::types::{NotationSyntaxError, RenderedLine, RenderedSegment};
    use pretty_assertions::assert_eq;

    fn echo(notation: &str) -> Result<String, NotationSyntaxError> {
        Ok(notation.to_string())
    }

    #[test]
    fn renders_with_header_parameters() {
        let doc = "```lof color: red; separator: ||\n() || = || ()\n```";
        let block = BlockRenderer::new(echo).render(
            "() || = || ()",
            Some(SectionInfo {
                text: doc,
                line_start: 0,
            }),
            &ParameterSet::default(),
        );

        assert_eq!(block.header_error, None);
        assert_eq!(block.parameters.separator, "||");
        assert_eq!(block.parameters.style["color"], "red");
        assert_eq!(
            block.lines,
            vec![RenderedLine::Segments(vec![
                RenderedSegment::Expression("() ".to_string()),
                RenderedSegment::Text {
                    text: " = ".to_string(),
                    place_right: false,
                },
                RenderedSegment::Expression(" ()".to_string()),
            ])]
        );
    }

    #[test]
    fn header_failure_falls_back_to_defaults() {
        let defaults = ParameterSet::default();
        let block = BlockRenderer::new(echo).render("()\n\n()", None, &defaults);

        assert_eq!(
            block.header_error.as_deref(),
            Some("block location is unknown, cannot read its header")
        );
        assert_eq!(block.parameters, defaults);
        assert_eq!(
            block.lines,
            vec![
                RenderedLine::Segments(vec![RenderedSegment::Expression("()".to_string())]),
                RenderedLine::Blank,
                RenderedLine::Segments(vec![RenderedSegment::Expression("()".to_string())]),
            ]
        );
    }

    #[test]
    fn custom_keyword() {
        let doc = "```laws separator: =>\n";
        let block = BlockRenderer::new(echo).with_keyword("laws").render(
            "a=>b",
            Some(SectionInfo {
                text: doc,
                line_start: 0,
            }),
            &ParameterSet::default(),
        );

        assert_eq!(block.header_error, None);
        assert_eq!(block.parameters.separator, "=>");
    }

    #[test]
    fn substituted_tokenizer_is_used() {
        let everything_literal = |line: &str, _: &str| vec![Segment::literal(line)];
        let block = BlockRenderer::new(echo)
            .with_tokenizer(everything_literal)
            .render("(a)::b", None, &ParameterSet::default());

        assert_eq!(
            block.lines,
            vec![RenderedLine::Segments(vec![RenderedSegment::Text {
                text: "(a)::b".to_string(),
                place_right: true,
            }])]
        );
    }
}
