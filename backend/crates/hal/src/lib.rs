//! HAL response envelope primitives.
//!
//! An [`Envelope`] carries a `_links` object with a mandatory `self` link and
//! an optional `_embedded` object holding one named collection. Failures are
//! embedded under [`ERRORS_KEY`] so clients can tell data from errors without
//! looking at the status code.
//!
//! ```
//! use hal::{ERRORS_KEY, Envelope};
//!
//! let envelope = Envelope::success("/api/Survey/Analyse", "candidates", vec![1, 2, 3]);
//! assert_eq!(envelope.self_href(), "/api/Survey/Analyse");
//! assert_eq!(envelope.embedded("candidates"), Some(&[1, 2, 3][..]));
//! assert!(envelope.embedded(ERRORS_KEY).is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Media type for HAL documents.
pub const HAL_JSON: &str = "application/hal+json";

/// Embedded key reserved for error collections.
pub const ERRORS_KEY: &str = "_errors";

/// Relation name of the link describing the request that produced a payload.
pub const SELF_REL: &str = "self";

/// A single hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    href: String,
}

impl Link {
    /// Build a link pointing at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// Target of the link.
    #[must_use]
    pub fn href(&self) -> &str {
        self.href.as_str()
    }
}

/// The `_links` object of an envelope.
///
/// The `self` relation is stored apart from the others so a deserialised
/// document without one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    self_link: Link,
    #[serde(flatten)]
    related: BTreeMap<String, Link>,
}

impl Links {
    fn new(self_href: impl Into<String>) -> Self {
        Self {
            self_link: Link::new(self_href),
            related: BTreeMap::new(),
        }
    }

    /// The `self` link.
    #[must_use]
    pub fn self_link(&self) -> &Link {
        &self.self_link
    }

    /// Look up a link by relation name, including `self`.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        if rel == SELF_REL {
            return Some(&self.self_link);
        }
        self.related.get(rel)
    }

    fn insert(&mut self, rel: String, link: Link) {
        if rel == SELF_REL {
            self.self_link = link;
        } else {
            self.related.insert(rel, link);
        }
    }
}

/// HAL document wrapping one embedded collection, or none.
///
/// ## Invariants
/// - `_links.self` is always present.
/// - Constructors embed at most one collection, so a payload never carries
///   data and errors together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "_links")]
    links: Links,
    #[serde(
        rename = "_embedded",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    embedded: BTreeMap<String, Vec<T>>,
}

impl<T> Envelope<T> {
    /// Envelope carrying only links.
    pub fn links_only(self_href: impl Into<String>) -> Self {
        Self {
            links: Links::new(self_href),
            embedded: BTreeMap::new(),
        }
    }

    /// Embed `items` under `key`.
    ///
    /// `key` should be a stable, caller-owned constant such as `candidates`;
    /// use [`Envelope::errors`] for failures.
    pub fn success(self_href: impl Into<String>, key: impl Into<String>, items: Vec<T>) -> Self {
        let mut envelope = Self::links_only(self_href);
        envelope.embedded.insert(key.into(), items);
        envelope
    }

    /// Embed `errors` under [`ERRORS_KEY`].
    ///
    /// ```
    /// use hal::{ERRORS_KEY, Envelope};
    ///
    /// let envelope = Envelope::errors("/api/Survey/Record", vec!["boom"]);
    /// assert!(envelope.is_error());
    /// assert_eq!(envelope.embedded(ERRORS_KEY), Some(&["boom"][..]));
    /// ```
    pub fn errors(self_href: impl Into<String>, errors: Vec<T>) -> Self {
        Self::success(self_href, ERRORS_KEY, errors)
    }

    /// Add or replace a link relation.
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.insert(rel.into(), Link::new(href));
        self
    }

    /// The `_links` object.
    #[must_use]
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Target of the `self` link.
    #[must_use]
    pub fn self_href(&self) -> &str {
        self.links.self_link().href()
    }

    /// Borrow the collection embedded under `key`.
    #[must_use]
    pub fn embedded(&self, key: &str) -> Option<&[T]> {
        self.embedded.get(key).map(Vec::as_slice)
    }

    /// Take the collection embedded under `key`.
    #[must_use]
    pub fn into_embedded(mut self, key: &str) -> Option<Vec<T>> {
        self.embedded.remove(key)
    }

    /// True when the envelope carries an error collection.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.embedded.contains_key(ERRORS_KEY)
    }

    /// True when nothing is embedded.
    #[must_use]
    pub fn is_links_only(&self) -> bool {
        self.embedded.is_empty()
    }
}
