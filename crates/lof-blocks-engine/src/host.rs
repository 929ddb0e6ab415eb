use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use crate::parsing::header::SectionInfo;

/// A fenced block found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedBlock<'a> {
    /// The whole document the block was found in.
    pub document: &'a str,
    /// 0-based line of the opening fence.
    pub header_line: usize,
    /// Content between the fences, without the final newline.
    pub body: String,
}

impl<'a> LocatedBlock<'a> {
    pub fn section(&self) -> SectionInfo<'a> {
        SectionInfo {
            text: self.document,
            line_start: self.header_line,
        }
    }
}

/// Finds every fenced code block whose info string starts with `keyword`.
pub fn locate_blocks<'a>(markdown: &'a str, keyword: &str) -> Vec<LocatedBlock<'a>> {
    let mut blocks = vec![];
    let mut current: Option<LocatedBlock<'a>> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                if info.split_whitespace().next() == Some(keyword) =>
            {
                let header_line = markdown[..range.start].matches('\n').count();
                log::debug!("found {keyword} block at line {header_line}");
                current = Some(LocatedBlock {
                    document: markdown,
                    header_line,
                    body: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.body.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut block) = current.take() {
                    if block.body.ends_with('\n') {
                        block.body.pop();
                    }
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}
