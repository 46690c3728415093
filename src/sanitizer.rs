//! The streaming tree builder: consumes tokenizer events, applies the
//! policy map at each open event, and flattens every closed element into
//! its parent.
//!
//! Children are always handed to ancestors as opaque, already-sanitized
//! text, never as structured nodes. A descendant therefore cannot escape
//! its ancestor's policy -- a skipped ancestor discards the flattened
//! output of everything beneath it in one step -- and memory stays
//! proportional to nesting depth, not document size.

use std::sync::LazyLock;

use html5gum::{Token, Tokenizer};
use regex::Regex;

use crate::attribute::Attribute;
use crate::options::Options;
use crate::policy::PolicyMap;
use crate::tag::Tag;
use crate::transform::stripped;

/// Elements that never take a closing tag.
///
/// The tokenizer emits only an open event for these, so the builder
/// synthesizes the close itself. Includes the legacy void names
/// (`basefont`, `keygen`, ...) so obsolete markup cannot hold an element
/// open across its siblings.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "command", "embed", "frame", "hr", "image",
    "img", "input", "isindex", "keygen", "link", "menuitem", "meta", "nextid", "param", "source",
    "track", "wbr",
];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Streaming HTML sanitizer.
///
/// Holds an injected [`PolicyMap`] and nothing else; all per-call state
/// lives on the stack of a single [`sanitize`](Sanitizer::sanitize) call,
/// so one instance can be reused freely across inputs.
///
/// # Example
///
/// ```
/// use html_sanitizer::{PolicyMap, Sanitizer};
///
/// let sanitizer = Sanitizer::new(PolicyMap::default());
/// assert_eq!(
///     sanitizer.sanitize("<font>hello</font><script>alert(1)</script>"),
///     "hello",
/// );
/// ```
pub struct Sanitizer {
    map: PolicyMap,
}

impl Sanitizer {
    /// Create a sanitizer over the given policy map.
    pub fn new(map: PolicyMap) -> Self {
        Self { map }
    }

    /// The injected policy map.
    pub fn policy(&self) -> &PolicyMap {
        &self.map
    }

    /// Sanitize `input` with no source context.
    ///
    /// Relative URLs are rewritten against empty host/path/protocol; use
    /// [`sanitize_with`](Sanitizer::sanitize_with) when the document's
    /// origin is known.
    pub fn sanitize(&self, input: &str) -> String {
        // Absent options are used as-is, without normalization.
        self.run(input, Options::default())
    }

    /// Sanitize `input`, resolving relative URLs against `options`.
    pub fn sanitize_with(&self, input: &str, options: &Options) -> String {
        self.run(input, options.normalized())
    }

    fn run(&self, input: &str, options: Options) -> String {
        let mut session = Session::new(&self.map, options);

        for token in Tokenizer::new(input).infallible() {
            match token {
                Token::StartTag(start) => {
                    let name = String::from_utf8_lossy(&start.name).into_owned();
                    let attrs = start
                        .attributes
                        .iter()
                        .map(|(name, value)| {
                            Attribute::new(
                                String::from_utf8_lossy(name).into_owned(),
                                String::from_utf8_lossy(value).into_owned(),
                            )
                        })
                        .collect();

                    session.open_tag(&name, attrs);
                    if start.self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                        session.close_tag();
                    }
                }
                Token::String(text) => session.write_text(&String::from_utf8_lossy(&text)),
                Token::EndTag(_) => session.close_tag(),
                Token::Comment(_) | Token::Doctype(_) | Token::Error(_) => {}
            }
        }

        session.finish()
    }
}

impl Default for Sanitizer {
    /// A sanitizer over the stock [`PolicyMap`].
    fn default() -> Self {
        Self::new(PolicyMap::default())
    }
}

/// State of one `sanitize` call: the open-element stack (innermost last)
/// and the finished root-level fragments.
struct Session<'a> {
    map: &'a PolicyMap,
    options: Options,
    stack: Vec<Tag>,
    fragments: Vec<String>,
}

impl<'a> Session<'a> {
    fn new(map: &'a PolicyMap, options: Options) -> Self {
        Self {
            map,
            options,
            stack: Vec::new(),
            fragments: Vec::new(),
        }
    }

    fn open_tag(&mut self, name: &str, attrs: Vec<Attribute>) {
        let tag = Tag::new(name, attrs);
        let tag = match self.map.get(name) {
            Some(transform) => transform.apply(tag, &self.options),
            None => {
                // Unknown element: pass its children through without the
                // wrapper. Pushing a node keeps open/close events balanced,
                // so the matching close cannot pop an ancestor.
                tracing::debug!("Unknown element <{name}>, unwrapping");
                stripped().apply(tag, &self.options)
            }
        };
        self.stack.push(tag);
    }

    fn write_text(&mut self, chunk: &str) {
        if chunk.trim().is_empty() {
            return;
        }

        // Single (non-global) replacement: only the first whitespace run in
        // a chunk collapses. No leading/trailing trim.
        let text = WHITESPACE_RUN.replacen(chunk, 1, " ");

        match self.stack.last_mut() {
            Some(tag) => tag.write_text(&text),
            None => self.fragments.push(text.into_owned()),
        }
    }

    fn close_tag(&mut self) {
        // Stray close tags with nothing open are dropped. The close name is
        // not checked against the popped node.
        let Some(tag) = self.stack.pop() else {
            return;
        };

        let flattened = tag.to_string();
        match self.stack.last_mut() {
            Some(parent) => parent.write_text(&flattened),
            None => self.fragments.push(flattened),
        }
    }

    fn finish(mut self) -> String {
        // The tokenizer emits no close events at end of input; close
        // whatever is still open, innermost first.
        while !self.stack.is_empty() {
            self.close_tag();
        }
        self.fragments.concat()
    }
}
