pub mod host;
pub mod parameters;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use host::{LocatedBlock, locate_blocks};
pub use parameters::{
    DEFAULT_SEPARATOR, ParameterOverride, ParameterSet, StyleMap, is_valid_separator, merge,
};
pub use parsing::{
    HeaderError, LOF_KEYWORD, SectionInfo, Segment, SegmentKind, extract_block_parameters,
    normalize_key, parse_configuration_line, tokenize,
};
pub use render::{
    BlockRenderer, EscapedNotation, NotationRenderer, NotationSyntaxError, RenderedBlock,
    RenderedLine, RenderedSegment, block_to_html,
};
