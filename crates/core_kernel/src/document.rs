//! Document type tags
//!
//! A claim submission carries several documents (contract, inspection report,
//! valuation, vehicle history, adjuster assessment). Analysis results are keyed
//! by a tag naming the document type. The set of tags is open: callers may
//! introduce new document types without changes to the evaluation engine.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Tag identifying the type of a claim document (e.g. `contract`, `acv`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTag(String);

impl DocumentTag {
    /// Creates a tag from any string
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for DocumentTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl AsRef<str> for DocumentTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DocumentTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocumentTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
