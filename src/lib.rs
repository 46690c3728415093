//! # html_sanitizer
//!
//! A streaming, policy-driven HTML sanitizer: untrusted fragments go in,
//! a constrained, policy-compliant HTML subset comes out.
//!
//! ## Overview
//!
//! The engine consumes the token stream of an external tokenizer
//! (`html5gum`) and maintains an explicit open-element stack. At each open
//! event the element's name is looked up in a [`PolicyMap`] and the
//! registered [`Transform`] builds a concrete [`Tag`] variant -- plain,
//! skipped (subtree dropped), self-closing, or stripped (unwrapped). At
//! each close event the element serializes itself and is flattened into
//! its parent as opaque text, so nothing can escape an ancestor's policy.
//!
//! Policies are data, not closures: a [`Transform`] is an ordered list of
//! [`Step`]s (attribute allow-listing, renaming, forced attributes, URL
//! rewriting, ...) composed with [`chain`].
//!
//! ## Quick start
//!
//! ```
//! let clean = html_sanitizer::sanitize(
//!     r#"<p onclick="steal()">Some <script>alert(1)</script>text</p>"#,
//! );
//! assert_eq!(clean, "<p>Some text</p>");
//! ```
//!
//! With source context, relative links resolve to absolute ones:
//!
//! ```
//! use html_sanitizer::Options;
//!
//! let options = Options::new("nowhere.com", "/page/", "http:");
//! let clean = html_sanitizer::sanitize_with(r#"<a href="next.html">next</a>"#, &options);
//! assert_eq!(
//!     clean,
//!     r#"<a href="http://nowhere.com/page/next.html" target="_blank" rel="nofollow">next</a>"#,
//! );
//! ```
//!
//! Custom policies start from [`SanitizerBuilder`] or a hand-built
//! [`PolicyMap`] injected into [`Sanitizer::new`].

pub mod attribute;
pub mod config;
pub mod error;
pub mod options;
pub mod policy;
pub mod sanitizer;
pub mod tag;
pub mod transform;

pub use attribute::{Attribute, attribute};
pub use config::SanitizerBuilder;
pub use error::{Result, SanitizerError};
pub use options::Options;
pub use policy::PolicyMap;
pub use sanitizer::Sanitizer;
pub use tag::{Tag, TagKind, tag};
pub use transform::{
    AttrRewrite, Step, Transform, chain, default_attrs, no_attrs, restricted_tag,
    self_closing_tag, skipped, stripped, transform_attributes, transform_tag,
};

use std::sync::LazyLock;

/// Process-wide sanitizer over the stock policy table, built once on first
/// use.
static DEFAULT_SANITIZER: LazyLock<Sanitizer> = LazyLock::new(Sanitizer::default);

/// Sanitize `input` with the stock policy table and no source context.
pub fn sanitize(input: &str) -> String {
    DEFAULT_SANITIZER.sanitize(input)
}

/// Sanitize `input` with the stock policy table, resolving relative URLs
/// against `options`.
pub fn sanitize_with(input: &str, options: &Options) -> String {
    DEFAULT_SANITIZER.sanitize_with(input, options)
}
