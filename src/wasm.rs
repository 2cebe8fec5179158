//! WASM bindings for flow-diagram.
//!
//! Exposes `layoutJson` and `renderSvg` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{InputFormat, OutputFormat};

/// Lay out a JSON posting list and return the diagram state as JSON.
#[wasm_bindgen(js_name = "layoutJson")]
pub fn layout_json(postings_json: &str) -> Result<String, JsError> {
    crate::render_dsl(postings_json, Some(InputFormat::Json), OutputFormat::Json)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a JSON posting list and return it drawn as SVG.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(postings_json: &str) -> Result<String, JsError> {
    crate::render_dsl(postings_json, Some(InputFormat::Json), OutputFormat::Svg)
        .map_err(|e| JsError::new(&e.to_string()))
}
