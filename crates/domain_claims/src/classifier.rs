//! Red flag classification
//!
//! Every red flag string is given a severity tier and a topical category.
//! Both are decided by ordered keyword tables: the flag text is lowercased and
//! searched for each rule's keywords as plain substrings, and the first rule
//! with a hit wins. The two tables are matched independently of each other, so
//! a flag may land in `Fraud & Misrepresentation` while only being `MEDIUM`
//! severity, or be `HIGH` severity while its category is `Other Issues`.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::DocumentTag;

/// Severity tier of a red flag
///
/// The classifier never assigns anything below `Medium`: a flag that matches
/// no keyword is still treated as a moderate risk rather than ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Ordering rank used when sorting flags (higher is more severe)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
        }
    }

    /// Contribution of one flag of this severity to the risk score
    pub fn risk_weight(&self) -> f64 {
        match self {
            Severity::Critical => 40.0,
            Severity::High => 25.0,
            Severity::Medium => 10.0,
        }
    }

    /// Wire spelling of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topical category of a red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagCategory {
    #[serde(rename = "Title & Ownership Issues")]
    TitleOwnership,
    #[serde(rename = "Fraud & Misrepresentation")]
    FraudMisrepresentation,
    #[serde(rename = "Coverage & Policy Issues")]
    CoveragePolicy,
    #[serde(rename = "Damage & Accident Issues")]
    DamageAccident,
    #[serde(rename = "Valuation Issues")]
    Valuation,
    #[serde(rename = "Maintenance & Condition Issues")]
    MaintenanceCondition,
    #[serde(rename = "Other Issues")]
    Other,
}

impl FlagCategory {
    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            FlagCategory::TitleOwnership => "Title & Ownership Issues",
            FlagCategory::FraudMisrepresentation => "Fraud & Misrepresentation",
            FlagCategory::CoveragePolicy => "Coverage & Policy Issues",
            FlagCategory::DamageAccident => "Damage & Accident Issues",
            FlagCategory::Valuation => "Valuation Issues",
            FlagCategory::MaintenanceCondition => "Maintenance & Condition Issues",
            FlagCategory::Other => "Other Issues",
        }
    }
}

impl fmt::Display for FlagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the severity table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeverityRule {
    pub severity: Severity,
    pub keywords: &'static [&'static str],
}

/// One row of the category table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryRule {
    pub category: FlagCategory,
    pub keywords: &'static [&'static str],
}

/// Severity rules in match order
pub const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        severity: Severity::Critical,
        keywords: &[
            "fraud",
            "forgery",
            "stolen",
            "salvage title",
            "rebuilt title",
            "policy violation",
            "coverage exclusion",
            "material misrepresentation",
        ],
    },
    SeverityRule {
        severity: Severity::High,
        keywords: &[
            "title issue",
            "odometer rollback",
            "previous total loss",
            "unreported damage",
            "modification",
            "racing",
        ],
    },
    SeverityRule {
        severity: Severity::Medium,
        keywords: &[
            "wear and tear",
            "maintenance issue",
            "pre-existing condition",
            "delayed reporting",
            "minor damage",
        ],
    },
];

/// Severity of a flag that matches no rule
pub const DEFAULT_SEVERITY: Severity = Severity::Medium;

/// Category rules in match order
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: FlagCategory::TitleOwnership,
        keywords: &["title", "ownership", "registration"],
    },
    CategoryRule {
        category: FlagCategory::FraudMisrepresentation,
        keywords: &["fraud", "forgery", "misrepresentation"],
    },
    CategoryRule {
        category: FlagCategory::CoveragePolicy,
        keywords: &["coverage", "policy", "exclusion"],
    },
    CategoryRule {
        category: FlagCategory::DamageAccident,
        keywords: &["damage", "accident", "repair"],
    },
    CategoryRule {
        category: FlagCategory::Valuation,
        keywords: &["valuation", "acv", "market"],
    },
    CategoryRule {
        category: FlagCategory::MaintenanceCondition,
        keywords: &["maintenance", "wear", "condition"],
    },
];

/// Category of a flag that matches no rule
pub const DEFAULT_CATEGORY: FlagCategory = FlagCategory::Other;

/// Outcome of classifying a single flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub severity: Severity,
    pub category: FlagCategory,
}

/// Keyword-table classifier for red flag text
///
/// Pure and total: every input string yields a classification.
#[derive(Debug, Clone, Copy)]
pub struct FlagClassifier {
    severity_rules: &'static [SeverityRule],
    category_rules: &'static [CategoryRule],
}

impl Default for FlagClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagClassifier {
    /// Creates a classifier over the standard rule tables
    pub fn new() -> Self {
        Self {
            severity_rules: SEVERITY_RULES,
            category_rules: CATEGORY_RULES,
        }
    }

    /// Creates a classifier over custom rule tables
    pub fn with_rules(
        severity_rules: &'static [SeverityRule],
        category_rules: &'static [CategoryRule],
    ) -> Self {
        Self {
            severity_rules,
            category_rules,
        }
    }

    /// Returns the severity table in match order
    pub fn severity_rules(&self) -> &'static [SeverityRule] {
        self.severity_rules
    }

    /// Returns the category table in match order
    pub fn category_rules(&self) -> &'static [CategoryRule] {
        self.category_rules
    }

    /// Classifies a flag raised by the given source document
    pub fn classify(&self, flag: &str, source: &DocumentTag) -> Classification {
        let lowered = flag.to_lowercase();
        let classification = Classification {
            severity: self.severity_of(&lowered, source),
            category: self.category_of(&lowered),
        };

        tracing::trace!(
            document = %source,
            severity = %classification.severity,
            category = %classification.category,
            "Classified red flag"
        );

        classification
    }

    /// Assigns a severity tier to a flag
    ///
    /// `source` is accepted so a per-document severity modifier can be added
    /// later; it does not currently affect the result.
    pub fn assess_severity(&self, flag: &str, source: &DocumentTag) -> Severity {
        self.severity_of(&flag.to_lowercase(), source)
    }

    /// Assigns a topical category to a flag
    pub fn determine_category(&self, flag: &str) -> FlagCategory {
        self.category_of(&flag.to_lowercase())
    }

    fn severity_of(&self, lowered: &str, _source: &DocumentTag) -> Severity {
        self.severity_rules
            .iter()
            .find(|rule| contains_any(lowered, rule.keywords))
            .map(|rule| rule.severity)
            .unwrap_or(DEFAULT_SEVERITY)
    }

    fn category_of(&self, lowered: &str) -> FlagCategory {
        self.category_rules
            .iter()
            .find(|rule| contains_any(lowered, rule.keywords))
            .map(|rule| rule.category)
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
