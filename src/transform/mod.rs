//! Policy transforms: inspectable steps composed into per-element policies.
//!
//! A [`Transform`] is an ordered list of [`Step`]s applied left to right by
//! a fold, each step consuming the tag the previous one produced. Keeping
//! policies as plain data rather than boxed closures makes a [`PolicyMap`]
//! inspectable and cheap to clone.
//!
//! Built-in combinators:
//!
//! - [`restricted_tag`] -- attribute allow-listing.
//! - [`default_attrs`] -- force fixed attributes onto an element.
//! - [`transform_tag`] -- rename an element.
//! - [`transform_attributes`] -- per-attribute rewrites (URL resolution).
//! - [`self_closing_tag`] -- void-element serialization.
//! - [`skipped`] / [`stripped`] -- drop the subtree / unwrap the element.
//! - [`chain`] -- compose any of the above.
//!
//! [`PolicyMap`]: crate::PolicyMap

mod url;

pub use url::AttrRewrite;

use crate::attribute::Attribute;
use crate::options::Options;
use crate::tag::{Tag, TagKind};

/// A single policy step.
///
/// Every step except [`SelfClosing`](Step::SelfClosing),
/// [`Skip`](Step::Skip) and [`Strip`](Step::Strip) produces a
/// [`TagKind::Basic`] tag, so variant-changing steps belong at the end of a
/// chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep only attributes whose name appears in the list. An empty list
    /// strips every attribute.
    RestrictAttrs(Vec<String>),
    /// Append the given attributes after the existing ones. No
    /// de-duplication is performed.
    DefaultAttrs(Vec<Attribute>),
    /// Rename the element, attributes unchanged.
    Rename(String),
    /// Rewrite attributes matched by name; unmatched attributes pass
    /// through unchanged, order preserved.
    TransformAttrs(Vec<(String, AttrRewrite)>),
    /// Convert to the self-closing variant, keeping name and attributes.
    SelfClosing,
    /// Drop the element and its entire subtree.
    Skip,
    /// Drop the wrapping element, keeping its children.
    Strip,
}

impl Step {
    fn apply(&self, tag: Tag, options: &Options) -> Tag {
        let (name, attrs) = tag.into_parts();
        match self {
            Step::RestrictAttrs(allowed) => Tag::new(
                name,
                attrs
                    .into_iter()
                    .filter(|a| allowed.iter().any(|n| n == a.name()))
                    .collect(),
            ),
            Step::DefaultAttrs(defaults) => {
                let mut attrs = attrs;
                attrs.extend(defaults.iter().cloned());
                Tag::new(name, attrs)
            }
            Step::Rename(new_name) => Tag::new(new_name.clone(), attrs),
            Step::TransformAttrs(rules) => Tag::new(
                name,
                attrs
                    .into_iter()
                    .map(|a| match rules.iter().find(|(n, _)| n == a.name()) {
                        Some((_, rewrite)) => rewrite.apply(a, options),
                        None => a,
                    })
                    .collect(),
            ),
            Step::SelfClosing => Tag::with_kind(TagKind::SelfClosing, name, attrs),
            Step::Skip => Tag::with_kind(TagKind::Skipped, name, attrs),
            Step::Strip => Tag::with_kind(TagKind::Stripped, name, attrs),
        }
    }
}

/// An ordered sequence of [`Step`]s forming one element's policy.
///
/// Applied via [`apply`](Transform::apply) when the sanitizer sees the
/// element's open event. An empty transform passes the tag through
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transform {
    steps: Vec<Step>,
}

impl Transform {
    /// A transform with no steps.
    pub fn identity() -> Self {
        Self::default()
    }

    /// The steps in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, each consuming the previous result.
    pub fn apply(&self, tag: Tag, options: &Options) -> Tag {
        self.steps
            .iter()
            .fold(tag, |tag, step| step.apply(tag, options))
    }
}

impl From<Step> for Transform {
    fn from(step: Step) -> Self {
        Self { steps: vec![step] }
    }
}

/// Compose transforms left to right.
///
/// Flattening the step lists makes composition associative: a chained
/// transform is itself a valid transform and can be chained again.
pub fn chain(transforms: impl IntoIterator<Item = Transform>) -> Transform {
    Transform {
        steps: transforms.into_iter().flat_map(|t| t.steps).collect(),
    }
}

/// Keep only the allow-listed attributes on a plain element.
///
/// Called with an empty slice this is the canonical "no attributes allowed"
/// policy (see [`no_attrs`]).
pub fn restricted_tag(allowed: &[&str]) -> Transform {
    Step::RestrictAttrs(allowed.iter().map(|s| s.to_string()).collect()).into()
}

/// Convert the element to its self-closing form, keeping name and current
/// attributes.
///
/// Apply after attribute restriction in a chain, or attributes meant for
/// removal are retained.
pub fn self_closing_tag() -> Transform {
    Step::SelfClosing.into()
}

/// Append fixed attributes to whatever the element already carries.
///
/// Chaining after [`restricted_tag`] is how "allow `href` but force
/// `target="_blank"`" is expressed.
pub fn default_attrs(attrs: Vec<Attribute>) -> Transform {
    Step::DefaultAttrs(attrs).into()
}

/// Rename the element, keeping its attributes.
pub fn transform_tag(new_name: &str) -> Transform {
    Step::Rename(new_name.to_string()).into()
}

/// Rewrite individual attributes by name through an [`AttrRewrite`].
pub fn transform_attributes(rules: Vec<(&str, AttrRewrite)>) -> Transform {
    Step::TransformAttrs(rules.into_iter().map(|(n, r)| (n.to_string(), r)).collect()).into()
}

/// Drop the element and everything inside it.
pub fn skipped() -> Transform {
    Step::Skip.into()
}

/// Unwrap the element, keeping its children.
pub fn stripped() -> Transform {
    Step::Strip.into()
}

/// A plain element with every attribute removed.
pub fn no_attrs() -> Transform {
    restricted_tag(&[])
}
