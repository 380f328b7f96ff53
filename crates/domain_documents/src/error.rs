//! Document domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::kind::DocumentKind;

/// Errors that can occur while preparing claim documents
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unknown document kind: {0}")]
    UnknownKind(String),

    #[error("Unsupported file format: {file_name}")]
    UnsupportedFormat { file_name: String },

    #[error("File {file_name} is {size}, the limit is {limit}")]
    FileTooLarge {
        file_name: String,
        size: String,
        limit: String,
    },

    #[error("No text content could be extracted")]
    NoExtractableText,

    #[error("Failed to process {kind} document {file_name}: {source}")]
    Extraction {
        kind: DocumentKind,
        file_name: String,
        #[source]
        source: PortError,
    },

    #[error("Insurance contract is required for analysis")]
    MissingContract,

    #[error("More than one {0} document submitted")]
    DuplicateDocument(DocumentKind),
}
