// src/utils.rs
use std::path::Path;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MEDIA_TYPE: &str = "application/msword";
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// Final cleanup applied to every extracted description.
///
/// Whitespace runs (newlines included) become a single space, so any run of
/// blank lines is folded as well. A stray byte order mark counts as
/// whitespace. The result is trimmed.
pub fn normalize_text(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '\u{feff}')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comparison key for a skill: lowercased and trimmed, nothing more.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Guess the declared media type of a local file from its extension
pub fn media_type_for_file(filename: &str) -> &'static str {
    match get_file_extension(filename).as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("docx") => DOCX_MEDIA_TYPE,
        Some("doc") => DOC_MEDIA_TYPE,
        _ => TEXT_MEDIA_TYPE,
    }
}

/// Split a comma separated CLI value into skills, dropping empty entries
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Hello \t  world \n"), "Hello world");
        assert_eq!(normalize_text("a\n\n\n\nb"), "a b");
        assert_eq!(normalize_text("   \n\t "), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_normalize_text_drops_byte_order_marks() {
        assert_eq!(normalize_text("\u{feff}Senior\u{feff}Engineer \u{feff} "), "Senior Engineer");
        assert_eq!(normalize_text("\u{feff}"), "");
    }

    #[test]
    fn test_normalize_text_never_leaves_blank_lines() {
        let out = normalize_text("line one\n\n\nline two\r\n\r\nline three");
        assert!(!out.contains("\n\n"));
        assert_eq!(out, "line one line two line three");
    }

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill(" SQL "), "sql");
        assert_eq!(normalize_skill("Node.js"), "node.js");
        assert_ne!(normalize_skill("JS"), normalize_skill("JavaScript"));
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("test.pdf"), Some("pdf".to_string()));
        assert_eq!(
            get_file_extension("document.DOCX"),
            Some("docx".to_string())
        );
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_media_type_for_file() {
        assert_eq!(media_type_for_file("cv.PDF"), PDF_MEDIA_TYPE);
        assert_eq!(media_type_for_file("cv.docx"), DOCX_MEDIA_TYPE);
        assert_eq!(media_type_for_file("cv.doc"), DOC_MEDIA_TYPE);
        assert_eq!(media_type_for_file("cv.md"), TEXT_MEDIA_TYPE);
        assert_eq!(media_type_for_file("resume"), TEXT_MEDIA_TYPE);
    }

    #[test]
    fn test_split_skill_list() {
        assert_eq!(
            split_skill_list("Rust, Go,,  ,SQL"),
            vec!["Rust".to_string(), " Go".to_string(), "SQL".to_string()]
        );
        assert!(split_skill_list("").is_empty());
    }
}
