//! WASM bindings for cgp2svg.
//!
//! Exposes `renderSvg` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::RenderPolicy;

/// Annotate an SVG template with a chromosome.
///
/// - `primary_as_text`: write primary-input connections as labels
/// - `primary_inactive_as_text`: same, for inactive nodes only
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(
    chromosome: &str,
    template: &str,
    primary_as_text: bool,
    primary_inactive_as_text: bool,
) -> Result<String, JsError> {
    let policy = RenderPolicy {
        primary_as_text,
        primary_inactive_as_text,
    };
    crate::render_svg(chromosome, template, policy).map_err(|e| JsError::new(&e.to_string()))
}
