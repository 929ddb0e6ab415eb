use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parameters::StyleMap;
use crate::parsing::key::to_css_key;

use super::types::{
    NotationSyntaxError, NotationRenderer, RenderedBlock, RenderedLine, RenderedSegment,
};

const ERROR_STYLE: &str = "color: red; margin: 1em; font-size: 50%;";
const LINE_STYLE: &str = "display: flex; align-items: center;";
const TEXT_STYLE: &str = "white-space: pre;";
const TEXT_RIGHT_STYLE: &str = "margin-left: auto; white-space: pre;";

/// Notation renderer that does not interpret the notation.
///
/// Emits the escaped source in a `span.lof-expression` so a client-side
/// renderer can pick it up.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedNotation;

impl NotationRenderer for EscapedNotation {
    fn render(&self, notation: &str) -> Result<String, NotationSyntaxError> {
        Ok(format!(
            r#"<span class="lof-expression">{}</span>"#,
            encode_text(notation)
        ))
    }
}

/// Style map as a single-line inline `style` attribute value.
pub fn inline_style(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {value};", to_css_key(key)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn error_to_html(message: &str) -> String {
    format!(
        r#"<div class="lof-error" style="{ERROR_STYLE}">{}</div>"#,
        encode_text(message)
    )
}

pub fn segment_to_html(segment: &RenderedSegment) -> String {
    match segment {
        RenderedSegment::Expression(html) => html.clone(),
        RenderedSegment::Text { text, place_right } => {
            let style = if *place_right {
                TEXT_RIGHT_STYLE
            } else {
                TEXT_STYLE
            };
            format!(r#"<span style="{style}">{}</span>"#, encode_text(text))
        }
        RenderedSegment::Error(message) => error_to_html(message),
    }
}

pub fn line_to_html(line: &RenderedLine) -> String {
    let mut out = format!(r#"<div class="lof-line" style="{LINE_STYLE}">"#);
    match line {
        RenderedLine::Blank => out.push_str("<br>"),
        RenderedLine::Segments(segments) => {
            for segment in segments {
                out.push_str(&segment_to_html(segment));
            }
        }
    }
    out.push_str("</div>");
    out
}

/// Serializes a rendered block, one `div.lof-line` per line.
pub fn block_to_html(block: &RenderedBlock) -> String {
    let mut out = String::new();
    let style = inline_style(&block.parameters.style);
    if style.is_empty() {
        out.push_str(r#"<div class="lof-block">"#);
    } else {
        let _ = write!(
            out,
            r#"<div class="lof-block" style="{}">"#,
            encode_double_quoted_attribute(&style)
        );
    }

    if let Some(message) = &block.header_error {
        out.push_str(&error_to_html(message));
    }
    for line in &block.lines {
        out.push_str(&line_to_html(line));
    }

    out.push_str("</div>");
    out
}
