//! Element trait for markup-emitting components.

/// A component that renders itself as HTML and CSS.
///
/// Implementations must be deterministic: the same state always produces
/// the same output, so rendering twice with identical input yields
/// byte-identical markup.
pub trait Element: Send + Sync {
    /// Get the element's unique type name.
    fn element_name(&self) -> &'static str;

    /// Generate HTML for this element.
    fn to_html(&self) -> String;

    /// Generate CSS rules for styling this element.
    ///
    /// Rules must be scoped to the element's own class names to avoid
    /// conflicts.
    fn to_css(&self) -> String;

    /// Get the test ID for DOM queries.
    fn test_id(&self) -> Option<&str> {
        None
    }
}
