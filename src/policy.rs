//! Per-element policy lookup.

use std::collections::HashMap;

use crate::attribute::attribute;
use crate::transform::{
    AttrRewrite, Transform, chain, default_attrs, no_attrs, restricted_tag, self_closing_tag,
    skipped, stripped, transform_attributes, transform_tag,
};

/// Lookup table from lower-cased element name to the [`Transform`] applied
/// at the element's open event.
///
/// An element absent from the map is unknown; the sanitizer unwraps unknown
/// elements, keeping their children. [`PolicyMap::default`] is the stock
/// table covering the full HTML element list; [`PolicyMap::new`] starts
/// empty.
#[derive(Clone, Debug)]
pub struct PolicyMap {
    map: HashMap<String, Transform>,
}

impl PolicyMap {
    /// An empty map: every element is unknown.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register `transform` for `name`, replacing any previous entry.
    /// Names are lower-cased on insertion, matching what the tokenizer
    /// emits.
    pub fn insert(&mut self, name: &str, transform: Transform) {
        let _ = self.map.insert(name.to_ascii_lowercase(), transform);
    }

    /// Remove the entry for `name`, making the element unknown.
    pub fn remove(&mut self, name: &str) {
        let _ = self.map.remove(&name.to_ascii_lowercase());
    }

    /// Look up the policy for a (lower-cased) element name.
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.map.get(name)
    }

    /// Returns `true` if a policy is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of registered policies.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no policies have been registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Policy for link elements: `href` only, resolved to an absolute URL,
/// forced to open in a new tab without passing referrer weight.
fn link_policy() -> Transform {
    chain([
        restricted_tag(&["href"]),
        transform_attributes(vec![("href", AttrRewrite::AbsoluteUrl)]),
        default_attrs(vec![
            attribute("target", "_blank"),
            attribute("rel", "nofollow"),
        ]),
    ])
}

/// Elements reduced to their bare form, all attributes removed.
const PLAIN_ELEMENTS: &[&str] = &[
    "abbr", "acronym", "address", "article", "aside", "b", "bdi", "caption", "cite", "code", "dd",
    "del", "details", "div", "dl", "dt", "em", "figcaption", "figure", "footer", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hr", "i", "ins", "kbd", "label", "mark", "ol", "output", "p",
    "picture", "pre", "rp", "rt", "rtc", "ruby", "s", "samp", "section", "small", "span", "strong",
    "sub", "summary", "sup", "table", "tbody", "tfoot", "thead", "tr", "u", "ul", "var",
];

/// Elements dropped together with their entire subtree: scripting, styling,
/// embeds, form controls, document metadata.
const DROPPED_ELEMENTS: &[&str] = &[
    "applet", "audio", "base", "basefont", "bgsound", "blink", "button", "canvas", "command",
    "datalist", "dialog", "element", "embed", "fieldset", "form", "frame", "frameset", "head",
    "iframe", "image", "input", "isindex", "keygen", "legend", "link", "meta", "meter", "multicol",
    "object", "optgroup", "option", "param", "script", "select", "shadow", "spacer", "style",
    "template", "textarea", "title", "track", "tt", "video", "xmp",
];

/// Wrappers that disappear while their content survives: document shells
/// and deprecated presentational elements.
const UNWRAPPED_ELEMENTS: &[&str] = &[
    "body", "center", "content", "font", "html", "marquee", "nav", "nobr", "noembed", "noframes",
    "noscript", "wbr",
];

/// Legacy elements renamed to a modern equivalent, attributes stripped.
const RENAMED_ELEMENTS: &[(&str, &str)] = &[
    ("dir", "ul"),
    ("hgroup", "header"),
    ("listing", "pre"),
    ("main", "section"),
    ("menu", "ul"),
    ("menuitem", "li"),
    ("plaintext", "pre"),
    ("strike", "s"),
];

/// Elements keeping a small attribute allow-list.
const RESTRICTED_ELEMENTS: &[(&str, &[&str])] = &[
    ("bdo", &["dir"]),
    ("blockquote", &["cite"]),
    ("col", &["span"]),
    ("colgroup", &["span"]),
    ("data", &["value"]),
    ("dfn", &["id"]),
    ("li", &["value"]),
    ("map", &["name"]),
    ("progress", &["value", "max"]),
    ("q", &["cite"]),
    ("td", &["colspan", "rowspan"]),
    ("th", &["colspan", "rowspan", "headers", "scope"]),
    ("time", &["datetime"]),
];

impl Default for PolicyMap {
    /// The stock policy table, covering the full element list from MDN.
    ///
    /// Per element: attribute allow-lists, URL rewriting on `href`/`src`,
    /// forced `target`/`rel` on links, legacy elements renamed to modern
    /// equivalents, scripting and form controls dropped outright, and
    /// document shells unwrapped.
    fn default() -> Self {
        let mut policy = PolicyMap::new();

        for name in PLAIN_ELEMENTS {
            policy.insert(name, no_attrs());
        }
        for name in DROPPED_ELEMENTS {
            policy.insert(name, skipped());
        }
        for name in UNWRAPPED_ELEMENTS {
            policy.insert(name, stripped());
        }
        for (name, new_name) in RENAMED_ELEMENTS {
            policy.insert(name, chain([no_attrs(), transform_tag(new_name)]));
        }
        for (name, allowed) in RESTRICTED_ELEMENTS {
            policy.insert(name, restricted_tag(allowed));
        }

        policy.insert("a", link_policy());
        policy.insert("area", link_policy());
        policy.insert("big", chain([transform_tag("strong"), no_attrs()]));
        policy.insert("br", chain([no_attrs(), self_closing_tag()]));
        policy.insert(
            "img",
            chain([
                restricted_tag(&["src", "alt", "title", "srcset", "ismap"]),
                transform_attributes(vec![("src", AttrRewrite::AbsoluteUrl)]),
                self_closing_tag(),
            ]),
        );
        policy.insert(
            "source",
            chain([
                restricted_tag(&["sizes", "src", "srcset", "type", "media"]),
                transform_attributes(vec![("src", AttrRewrite::AbsoluteUrl)]),
                self_closing_tag(),
            ]),
        );

        policy
    }
}
