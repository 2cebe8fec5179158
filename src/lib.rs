//! flow-diagram — lays out ledger postings as a node/arrow flow diagram.
//!
//! Public API: `layout_postings()`, `render_dsl()`, and the `editor` model
//! for the interactive shell that consumes a layout.

pub mod config;
pub mod editor;
pub mod error;
pub mod layout;
pub mod postings;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::str::FromStr;

pub use crate::config::{LayoutConfig, RenderConfig};
pub use crate::error::{FlowError, Result};
pub use crate::layout::types::{ArrowData, DiagramState, NodeData};
pub use crate::postings::{InputFormat, Posting};

/// What `render_dsl` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The `DiagramState` as pretty-printed JSON.
    #[default]
    Json,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(FlowError::UnknownFormat(other.to_string())),
        }
    }
}

/// Lay out postings with the default geometry.
pub fn layout_postings(postings: &[Posting]) -> DiagramState {
    layout::layout(postings)
}

/// Parse postings from `src`, lay them out, and serialise the result.
///
/// `input` of `None` detects JSON vs. the text form.
pub fn render_dsl(src: &str, input: Option<InputFormat>, output: OutputFormat) -> Result<String> {
    let postings = postings::parse(src, input)?;
    let state = layout_postings(&postings);
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&state)?),
        OutputFormat::Svg => Ok(renderers::render_svg(
            &state,
            &LayoutConfig::default(),
            &RenderConfig::default(),
        )),
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
