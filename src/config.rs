//! Builder for assembling a [`Sanitizer`] with a customized policy map.

use crate::policy::PolicyMap;
use crate::sanitizer::Sanitizer;
use crate::transform::{Transform, skipped, stripped};

/// Fluent construction of a [`Sanitizer`] on top of the stock policy table
/// (or an empty one).
///
/// # Example
///
/// ```
/// use html_sanitizer::{SanitizerBuilder, restricted_tag};
///
/// let sanitizer = SanitizerBuilder::new()
///     .skip("a")                                  // drop links entirely
///     .policy("span", restricted_tag(&["class"])) // but keep span classes
///     .build();
///
/// assert_eq!(
///     sanitizer.sanitize(r#"<p><a href="/x">gone</a><span class="k">kept</span></p>"#),
///     r#"<p><span class="k">kept</span></p>"#,
/// );
/// ```
pub struct SanitizerBuilder {
    map: PolicyMap,
}

impl SanitizerBuilder {
    /// Start from the stock policy table.
    pub fn new() -> Self {
        Self {
            map: PolicyMap::default(),
        }
    }

    /// Start from an empty table where every element is unknown (and is
    /// therefore unwrapped).
    pub fn empty() -> Self {
        Self {
            map: PolicyMap::new(),
        }
    }

    /// Set the policy for an element, replacing any existing entry.
    pub fn policy(mut self, name: &str, transform: Transform) -> Self {
        self.map.insert(name, transform);
        self
    }

    /// Drop the element and its entire subtree.
    pub fn skip(mut self, name: &str) -> Self {
        self.map.insert(name, skipped());
        self
    }

    /// Unwrap the element, keeping its children.
    pub fn strip(mut self, name: &str) -> Self {
        self.map.insert(name, stripped());
        self
    }

    /// Remove the element's entry, making it unknown.
    pub fn remove(mut self, name: &str) -> Self {
        self.map.remove(name);
        self
    }

    /// Consume the builder and return the configured [`Sanitizer`].
    pub fn build(self) -> Sanitizer {
        Sanitizer::new(self.map)
    }
}

impl Default for SanitizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
