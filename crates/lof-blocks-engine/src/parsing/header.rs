use thiserror::Error;

use crate::parameters::{ParameterOverride, ParameterSet, merge};

use super::config_line::parse_configuration_line;

/// Block-language tag that opens a Laws of Form block.
pub const LOF_KEYWORD: &str = "lof";

/// Where a block's header sits inside the document that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo<'a> {
    /// Full source text of the document.
    pub text: &'a str,
    /// 0-based index of the header line in `text`.
    pub line_start: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("block location is unknown, cannot read its header")]
    MissingSectionInfo,
    #[error("keyword {keyword:?} not found in block header {header:?}")]
    KeywordNotFound { keyword: String, header: String },
}

impl<'a> SectionInfo<'a> {
    /// The header line, or `None` if `line_start` is past the end of `text`.
    pub fn header_line(&self) -> Option<&'a str> {
        self.text.split('\n').nth(self.line_start)
    }
}

/// Returns the trimmed configuration text following the first `keyword` in `header`.
///
/// The keyword may appear at any column, after any number of fence markers.
pub fn configuration_after_keyword<'a>(
    header: &'a str,
    keyword: &str,
) -> Result<&'a str, HeaderError> {
    let start = header
        .find(keyword)
        .ok_or_else(|| HeaderError::KeywordNotFound {
            keyword: keyword.to_string(),
            header: header.to_string(),
        })?;
    Ok(header[start + keyword.len()..].trim())
}

/// Parses the configuration declared on a block's header line.
pub fn extract_block_override(
    section: Option<SectionInfo<'_>>,
    keyword: &str,
) -> Result<ParameterOverride, HeaderError> {
    let header = section
        .as_ref()
        .and_then(SectionInfo::header_line)
        .ok_or(HeaderError::MissingSectionInfo)?;

    let raw = configuration_after_keyword(header, keyword)?;
    Ok(parse_configuration_line(raw))
}

/// Resolves the effective parameters of a block: `defaults` overlaid with
/// whatever its header declares.
///
/// `defaults` is only read; the result is an independent copy.
pub fn extract_block_parameters(
    section: Option<SectionInfo<'_>>,
    keyword: &str,
    defaults: &ParameterSet,
) -> Result<ParameterSet, HeaderError> {
    let declared = extract_block_override(section, keyword)?;
    Ok(merge(defaults, &declared))
}
