//! Upload validation and extracted-text assembly

use crate::config::UploadLimits;
use crate::error::DocumentError;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Checks an uploaded file against the configured limits
///
/// # Errors
///
/// - `UnsupportedFormat` if the extension is not accepted (case-insensitive)
/// - `FileTooLarge` if the file exceeds `max_file_size_bytes`
pub fn validate_upload(file_name: &str, size: u64, limits: &UploadLimits) -> Result<(), DocumentError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    let supported = extension
        .as_deref()
        .is_some_and(|ext| limits.supported_extensions.iter().any(|s| s == ext));
    if !supported {
        return Err(DocumentError::UnsupportedFormat {
            file_name: file_name.to_string(),
        });
    }

    if size > limits.max_file_size_bytes {
        return Err(DocumentError::FileTooLarge {
            file_name: file_name.to_string(),
            size: format_file_size(size),
            limit: format_file_size(limits.max_file_size_bytes),
        });
    }

    Ok(())
}

/// Formats a byte count as `0B`, `512.0B`, `1.5KB`, `50.0MB`, ...
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1}{}", size, SIZE_UNITS[unit])
}

/// Joins per-page text into one document body
///
/// Each non-empty page is introduced by a `--- Page N ---` header (1-based).
/// Pages that yielded no text are skipped.
///
/// # Errors
///
/// Returns `NoExtractableText` if no page had any text.
pub fn assemble_pages<I, S>(pages: I) -> Result<String, DocumentError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for (index, page) in pages.into_iter().enumerate() {
        let Some(text) = page else {
            tracing::warn!(page = index + 1, "Could not extract text from page");
            continue;
        };
        let text = text.as_ref();
        if text.is_empty() {
            continue;
        }
        content.push_str(&format!("\n--- Page {} ---\n", index + 1));
        content.push_str(text);
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DocumentError::NoExtractableText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0B");
        assert_eq!(format_file_size(512), "512.0B");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50.0MB");
    }

    #[test]
    fn test_validate_upload_accepts_uppercase_pdf() {
        assert!(validate_upload("CONTRACT.PDF", 1024, &UploadLimits::default()).is_ok());
    }

    #[test]
    fn test_validate_upload_rejects_other_formats() {
        let result = validate_upload("contract.docx", 1024, &UploadLimits::default());
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat { .. })));
        let result = validate_upload("contract", 1024, &UploadLimits::default());
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_validate_upload_size_limit() {
        let limits = UploadLimits::default();
        assert!(validate_upload("a.pdf", limits.max_file_size_bytes, &limits).is_ok());
        let result = validate_upload("a.pdf", limits.max_file_size_bytes + 1, &limits);
        match result {
            Err(DocumentError::FileTooLarge { limit, .. }) => assert_eq!(limit, "50.0MB"),
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_pages_skips_empty() {
        let pages = vec![Some("Coverage terms"), None, Some(""), Some("Exclusions")];
        let text = assemble_pages(pages).unwrap();
        assert_eq!(
            text,
            "--- Page 1 ---\nCoverage terms\n--- Page 4 ---\nExclusions"
        );
    }

    #[test]
    fn test_assemble_pages_without_text() {
        let pages: Vec<Option<&str>> = vec![None, Some("")];
        assert!(matches!(assemble_pages(pages), Err(DocumentError::NoExtractableText)));
    }
}
