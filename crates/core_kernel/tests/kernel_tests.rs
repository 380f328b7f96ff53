//! Tests for core_kernel types

use std::collections::HashMap;

use core_kernel::{DocumentTag, EvaluationId, PortError, SubmissionId};
use uuid::Uuid;

// ============================================================================
// Identifier Tests
// ============================================================================

mod identifier_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(EvaluationId::new(), EvaluationId::new());
        assert_ne!(SubmissionId::new_v7(), SubmissionId::new_v7());
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(EvaluationId::prefix(), "EVL");
        assert_eq!(SubmissionId::prefix(), "SUB");
    }

    #[test]
    fn test_parse_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: SubmissionId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("EVL-not-a-uuid".parse::<EvaluationId>().is_err());
    }

    #[test]
    fn test_json_serialization() {
        let id = EvaluationId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EvaluationId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

// ============================================================================
// Document Tag Tests
// ============================================================================

mod document_tag_tests {
    use super::*;

    #[test]
    fn test_tag_is_open_set() {
        let tag = DocumentTag::new("police_report");
        assert_eq!(tag.as_str(), "police_report");
        assert_eq!(tag.to_string(), "police_report");
    }

    #[test]
    fn test_tag_compares_with_str() {
        let tag = DocumentTag::from("contract");
        assert_eq!(tag, "contract");
    }

    #[test]
    fn test_tag_serializes_as_plain_string() {
        let json = serde_json::to_string(&DocumentTag::from("acv")).unwrap();
        assert_eq!(json, "\"acv\"");
    }

    #[test]
    fn test_tag_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(DocumentTag::from("history"), 1);
        assert_eq!(map.get("history"), Some(&1));
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_port_error_timeout_message() {
        let error = PortError::timeout("complete", 300_000);
        assert_eq!(error.to_string(), "Timeout after 300000ms: complete");
        assert!(error.is_transient());
    }

    #[test]
    fn test_port_error_transformation_is_permanent() {
        let error = PortError::transformation("contract.pdf is not a readable PDF");
        assert!(!error.is_transient());
        assert!(error.to_string().contains("contract.pdf"));
    }
}
