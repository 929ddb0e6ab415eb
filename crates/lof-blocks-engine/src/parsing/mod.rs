//! # Parsing
//!
//! String-level parsing for Laws of Form blocks. Everything here is a pure
//! function over borrowed text.
//!
//! ## Modules
//!
//! - **`segment`**: `tokenize()` splits a content line into notation/literal segments
//! - **`key`**: CSS key <-> compound style-key conversion
//! - **`config_line`**: `parse_configuration_line()` for `key: value;` headers
//! - **`header`**: finds the configuration on a block's header line and merges it
//!   over the defaults
//!
//! ## Flow
//!
//! header line -> `configuration_after_keyword` -> `parse_configuration_line`
//! -> `merge` with defaults -> effective separator -> `tokenize` per line.

pub mod config_line;
pub mod header;
pub mod key;
pub mod segment;

pub use config_line::parse_configuration_line;
pub use header::{
    HeaderError, LOF_KEYWORD, SectionInfo, extract_block_override, extract_block_parameters,
};
pub use key::{normalize_key, to_css_key, to_css_string};
pub use segment::{Segment, SegmentKind, tokenize};
