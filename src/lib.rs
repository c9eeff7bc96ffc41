//! cgp2svg: render Cartesian Genetic Programming chromosomes as annotated
//! SVG circuit diagrams.
//!
//! Pipeline: chromosome text → [`chromosome::decode`] →
//! [`activity::compute_active`] → [`annotate::annotate`] over an
//! [`svg::SvgDocument`] parsed from the diagram template.
//!
//! Public API: [`render_svg`].

pub mod activity;
pub mod annotate;
pub mod chromosome;
pub mod config;
pub mod document;
pub mod error;
pub mod functions;
pub mod layout;
pub mod summary;
pub mod svg;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::RenderPolicy;
pub use error::{DecodeError, DiagramError, Error, Result};

use crate::svg::SvgDocument;

/// Decode `circuit`, annotate `template` with it and return the SVG text.
#[tracing::instrument(skip_all, fields(policy = ?policy))]
pub fn render_svg(circuit: &str, template: &str, policy: RenderPolicy) -> Result<String> {
    let decoded = chromosome::decode(circuit)?;
    let active = activity::compute_active(&decoded);
    let mut document = SvgDocument::parse(template)?;
    annotate::annotate(&decoded, &active, policy, &mut document)?;
    Ok(document.to_svg_string())
}

#[cfg(test)]
#[path = "../tests/rust/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/rust/test_render.rs"]
mod tests;
