//! Rendering policy for the annotator.

/// Connection-rendering flags, passed through unchanged from the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Write primary-input connections as text labels instead of lines.
    pub primary_as_text: bool,
    /// Same, but only for inactive nodes.
    pub primary_inactive_as_text: bool,
}

impl RenderPolicy {
    /// Whether primary-input connections of a node become text labels.
    pub fn primary_text_for(&self, active: bool) -> bool {
        self.primary_as_text || (!active && self.primary_inactive_as_text)
    }
}
