//! The [`Attribute`] name/value pair and its canonical serialization.

use std::fmt;

/// An immutable HTML attribute.
///
/// Serializes as `name="value"`. The value is written out verbatim -- this
/// layer performs no escaping, so a value containing `"` will break the
/// surrounding markup. Callers defending against attribute breakout must
/// pre-validate or escape values before building policies around them.
///
/// # Example
///
/// ```
/// use html_sanitizer::attribute;
///
/// let a = attribute("href", "http://nowhere.com");
/// assert_eq!(a.to_string(), r#"href="http://nowhere.com""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create an attribute from a name and a tokenizer-decoded value.
    ///
    /// No validation of characters is performed.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

/// Shorthand for [`Attribute::new`], convenient when building policies.
pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Attribute {
    Attribute::new(name, value)
}
