//! Relative-to-absolute URL rewriting for link-bearing attributes.

use std::sync::LazyLock;

use regex::Regex;

use crate::attribute::Attribute;
use crate::options::Options;

/// Values already absolute (or mail links) are left alone.
static ABSOLUTE_OR_MAILTO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://|mailto:)").expect("invalid scheme pattern"));

/// Per-attribute rewrite applied through
/// [`transform_attributes`](super::transform_attributes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrRewrite {
    /// Resolve the value to an absolute URL against the source host, path
    /// and protocol of the current [`Options`].
    AbsoluteUrl,
}

impl AttrRewrite {
    pub(crate) fn apply(self, attr: Attribute, options: &Options) -> Attribute {
        match self {
            AttrRewrite::AbsoluteUrl => rewrite_url(attr, options),
        }
    }
}

/// Decision order, first match wins:
///
/// 1. `http(s)://` or `mailto:` values pass through unchanged;
/// 2. `//host/...` gets the protocol prepended;
/// 3. `/path` gets protocol and host prepended;
/// 4. anything else resolves against the document directory.
///
/// The result is plain string concatenation over normalized options and is
/// never validated as a URL.
fn rewrite_url(attr: Attribute, options: &Options) -> Attribute {
    let value = attr.value();
    if ABSOLUTE_OR_MAILTO.is_match(value) {
        return attr;
    }

    if value.starts_with("//") {
        return Attribute::new(attr.name(), format!("{}{}", options.protocol, value));
    }

    let domain = format!("{}//{}", options.protocol, options.host);
    if value.starts_with('/') {
        return Attribute::new(attr.name(), format!("{domain}{value}"));
    }

    Attribute::new(
        attr.name(),
        format!("{}{}{}", domain, options.path, value),
    )
}
