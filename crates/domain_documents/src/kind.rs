//! Well-known claim document kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::DocumentTag;

use crate::error::DocumentError;

/// The documents a claim submission may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Insurance contract (required)
    Contract,
    /// Vehicle inspection report
    Inspection,
    /// Actual cash value assessment
    Acv,
    /// Vehicle history report
    History,
    /// Adjuster assessment form
    Adjuster,
}

impl DocumentKind {
    /// All kinds in canonical processing order, contract first
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Contract,
        DocumentKind::Inspection,
        DocumentKind::Acv,
        DocumentKind::History,
        DocumentKind::Adjuster,
    ];

    /// Tag used to key this kind's analysis in a bundle
    pub fn tag_str(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "contract",
            DocumentKind::Inspection => "inspection",
            DocumentKind::Acv => "acv",
            DocumentKind::History => "history",
            DocumentKind::Adjuster => "adjuster",
        }
    }

    pub fn tag(&self) -> DocumentTag {
        DocumentTag::from(self.tag_str())
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "Insurance Contract",
            DocumentKind::Inspection => "Vehicle Inspection Report",
            DocumentKind::Acv => "ACV Value Document",
            DocumentKind::History => "Vehicle History Report",
            DocumentKind::Adjuster => "Adjuster Assessment Form",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, DocumentKind::Contract)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.tag_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DocumentError::UnknownKind(s.to_string()))
    }
}
