//! Tag variants: the four behaviors an in-progress element can take.
//!
//! A [`Tag`] carries the shared fields (name, attribute sequence, text
//! accumulator) and a [`TagKind`] deciding how text writes and serialization
//! behave. The kind is fixed at construction -- transforms that need a
//! different variant build a new `Tag` rather than mutating one.

use std::fmt;

use crate::attribute::Attribute;

/// Serialization behavior of a [`Tag`], fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// Accumulates text; serializes as `<name attrs>text</name>`.
    Basic,
    /// Discards text; serializes to nothing. The element and everything
    /// written into it during its lifetime disappear.
    Skipped,
    /// Discards text (none is representable); serializes as `<name attrs />`.
    SelfClosing,
    /// Accumulates text like `Basic`; serializes to the text alone, so the
    /// wrapping element disappears while its children survive unwrapped.
    Stripped,
}

/// An in-progress element node on the sanitizer's open-element stack.
///
/// # Example
///
/// ```
/// use html_sanitizer::{attribute, tag};
///
/// let mut t = tag("a", vec![attribute("href", "http://nowhere.com")]);
/// t.write_text("Link text");
/// assert_eq!(t.to_string(), r#"<a href="http://nowhere.com">Link text</a>"#);
/// ```
#[derive(Clone, Debug)]
pub struct Tag {
    kind: TagKind,
    name: String,
    attributes: Vec<Attribute>,
    text: String,
}

impl Tag {
    /// Create a [`TagKind::Basic`] tag.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::with_kind(TagKind::Basic, name, attributes)
    }

    /// Create a tag with an explicit variant.
    pub fn with_kind(kind: TagKind, name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            kind,
            name: name.into(),
            attributes,
            text: String::new(),
        }
    }

    /// The element name as it will serialize.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current attribute sequence. Duplicate names are allowed.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The accumulated text (already-flattened children included).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The variant this tag was constructed with.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Append already-sanitized text. `Skipped` and `SelfClosing` tags
    /// ignore the write.
    pub fn write_text(&mut self, text: &str) {
        match self.kind {
            TagKind::Basic | TagKind::Stripped => self.text.push_str(text),
            TagKind::Skipped | TagKind::SelfClosing => {}
        }
    }

    /// Decompose into name and attributes, for transforms constructing a
    /// replacement tag.
    pub fn into_parts(self) -> (String, Vec<Attribute>) {
        (self.name, self.attributes)
    }

    fn fmt_attrs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in &self.attributes {
            write!(f, " {attr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TagKind::Basic => {
                write!(f, "<{}", self.name)?;
                self.fmt_attrs(f)?;
                write!(f, ">{}</{}>", self.text, self.name)
            }
            TagKind::Skipped => Ok(()),
            TagKind::SelfClosing => {
                write!(f, "<{}", self.name)?;
                self.fmt_attrs(f)?;
                f.write_str(" />")
            }
            TagKind::Stripped => f.write_str(&self.text),
        }
    }
}

/// Shorthand for [`Tag::new`], convenient when building custom policies.
pub fn tag(name: impl Into<String>, attributes: Vec<Attribute>) -> Tag {
    Tag::new(name, attributes)
}
