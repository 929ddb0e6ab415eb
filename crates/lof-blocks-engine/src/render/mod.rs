//! # Rendering
//!
//! The boundary between tokenized lines and the external notation renderer.
//!
//! Failures are contained at the smallest unit: a bad segment becomes an
//! inline error inside its line, a bad header becomes an inline error at the
//! top of its block. Nothing here returns `Err` to the host.
//!
//! ## Modules
//!
//! - **`types`**: collaborator traits (`NotationRenderer`, `LineTokenizer`),
//!   error types and rendered output
//! - **`line`**: `render_line()` / `render_segment()`
//! - **`block`**: `BlockRenderer` resolves a block header and renders its body
//! - **`html`**: HTML serialization and the `EscapedNotation` pass-through renderer

pub mod block;
pub mod html;
pub mod line;
pub mod types;

pub use block::BlockRenderer;
pub use html::{EscapedNotation, block_to_html};
pub use line::{render_line, render_segment};
pub use types::{
    LineTokenizer, NotationRenderer, NotationSyntaxError, RenderedBlock, RenderedLine,
    RenderedSegment, SegmentError, SeparatorTokenizer,
};
