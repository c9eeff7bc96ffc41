//! Diagram-document boundary: the capabilities the annotator needs from a
//! template document.

use crate::error::DiagramError;
use crate::layout::Point;

/// A mutable diagram template whose elements are addressed by label.
///
/// Lookups search the subtree of `scope`, depth first in document order, and
/// fail with [`DiagramError::ElementNotFound`] when the label is absent.
pub trait DiagramDocument {
    type Element: Copy;

    fn root(&self) -> Self::Element;

    fn find_element_by_label(
        &self,
        scope: Self::Element,
        label: &str,
    ) -> Result<Self::Element, DiagramError>;

    /// Parent of the first element labeled `label` within `scope`.
    fn find_parent_by_label(
        &self,
        scope: Self::Element,
        label: &str,
    ) -> Result<Self::Element, DiagramError>;

    /// Replace `old` with `new` in the style of `element` and its descendants.
    fn set_style_color(&mut self, element: Self::Element, old: &str, new: &str);

    /// Set the stroke color in the style of `element`.
    fn set_stroke_color(&mut self, element: Self::Element, color: &str);

    fn set_text(&mut self, element: Self::Element, text: &str);

    fn add_line(&mut self, parent: Self::Element, from: Point, to: Point, color: &str);

    fn add_text(&mut self, parent: Self::Element, at: Point, text: &str, color: &str);

    /// Translation applied by `element`'s own `transform`, `(0, 0)` if none.
    fn get_translation_offset(&self, element: Self::Element) -> (f64, f64);

    /// Move `element` by `(dx, dy)` through its `x`/`y` attributes.
    fn shift_position(
        &mut self,
        element: Self::Element,
        dx: f64,
        dy: f64,
    ) -> Result<(), DiagramError>;

    /// Detach `element` and append it as the last child of the root.
    fn reparent_to_root_end(&mut self, element: Self::Element);
}
