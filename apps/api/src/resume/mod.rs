//! Resume text extraction for uploaded PDF and DOCX files.
//!
//! Only plain text comes out of here; the advisor decides what the skills are.

pub mod handlers;

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOCX_BODY: &str = "word/document.xml";

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p\b[^>]*?(?:/>|>(.*?)</w:p>)").expect("paragraph pattern is valid")
});
static TEXT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t\b[^>]*?(?:/>|>(.*?)</w:t>)").expect("text run pattern is valid")
});
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#x([0-9A-Fa-f]+)|#([0-9]+)|(lt|gt|quot|apos|amp));")
        .expect("entity pattern is valid")
});

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive is unreadable: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("DOCX body is unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Docx,
}

impl ResumeKind {
    /// Detects the format from the upload's content type, falling back to the
    /// file extension when the content type is missing or generic.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let by_mime = content_type.and_then(|ct| {
            match ct.split(';').next().unwrap_or_default().trim() {
                PDF_MIME => Some(ResumeKind::Pdf),
                DOCX_MIME => Some(ResumeKind::Docx),
                _ => None,
            }
        });

        by_mime.or_else(|| {
            let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some(ResumeKind::Pdf),
                "docx" => Some(ResumeKind::Docx),
                _ => None,
            }
        })
    }
}

/// Extracts plain text from a resume document.
pub fn extract_text(kind: ResumeKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        ResumeKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        ResumeKind::Docx => extract_docx_text(bytes),
    }
}

/// Reads `word/document.xml` and joins paragraph text with newlines.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;
    Ok(document_xml_text(&xml))
}

fn document_xml_text(xml: &str) -> String {
    PARAGRAPH
        .captures_iter(xml)
        .map(|para| {
            para.get(1)
                .map(|body| {
                    TEXT_RUN
                        .captures_iter(body.as_str())
                        .filter_map(|run| run.get(1))
                        .map(|t| unescape_xml(t.as_str()))
                        .collect::<String>()
                })
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes the predefined entities and numeric character references in one
/// pass. References to invalid code points are left as written.
fn unescape_xml(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse().ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("quot") => Some('"'),
                    Some("apos") => Some('\''),
                    Some("amp") => Some('&'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;

    /// Builds a minimal DOCX archive whose body holds the given XML.
    pub(crate) fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file(DOCX_BODY, options).unwrap();
        writer.write_all(body_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    pub(crate) fn docx_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!(r#"<w:p w:rsidR="00A1"><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
            .collect();
        docx_with_body(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document><w:body>{body}</w:body></w:document>"#
        ))
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(ResumeKind::detect(Some("application/pdf"), None), Some(ResumeKind::Pdf));
        assert_eq!(ResumeKind::detect(Some(DOCX_MIME), Some("cv.bin")), Some(ResumeKind::Docx));
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            ResumeKind::detect(Some("application/octet-stream"), Some("Resume.PDF")),
            Some(ResumeKind::Pdf)
        );
        assert_eq!(ResumeKind::detect(None, Some("cv.docx")), Some(ResumeKind::Docx));
    }

    #[test]
    fn test_detect_rejects_other_formats() {
        assert_eq!(ResumeKind::detect(Some("text/plain"), Some("cv.txt")), None);
        assert_eq!(ResumeKind::detect(None, Some("resume")), None);
        assert_eq!(ResumeKind::detect(None, None), None);
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let bytes = docx_paragraphs(&["Jane Doe", "Skills: Rust, SQL"]);
        let text = extract_text(ResumeKind::Docx, &bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: Rust, SQL");
    }

    #[test]
    fn test_docx_runs_concatenate_within_paragraph() {
        let xml = r#"<w:body><w:p><w:r><w:t>Data</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve"> Science</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>R &amp; D</w:t></w:r></w:p></w:body>"#;
        assert_eq!(document_xml_text(xml), "Data Science\n\nR & D");
    }

    #[test]
    fn test_self_closing_text_run_is_skipped() {
        let xml = r#"<w:p><w:r><w:t xml:space="preserve"/></w:r><w:r><w:t>A</w:t></w:r></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>"#;
        assert_eq!(document_xml_text(xml), "A\nB");
    }

    #[test]
    fn test_numeric_character_references_are_decoded() {
        let xml = "<w:p><w:r><w:t>Don&#8217;t</w:t></w:r><w:r><w:t> &#x2013; C&#43;&#43;</w:t></w:r></w:p>";
        assert_eq!(document_xml_text(xml), "Don\u{2019}t \u{2013} C++");
    }

    #[test]
    fn test_invalid_character_reference_is_kept() {
        assert_eq!(unescape_xml("&#xD800; &#99999999999;"), "&#xD800; &#99999999999;");
    }

    #[test]
    fn test_unescape_handles_entities_once() {
        assert_eq!(unescape_xml("&amp;lt; &lt;b&gt; &quot;x&quot;"), "&lt; <b> \"x\"");
    }

    #[test]
    fn test_docx_without_body_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("docProps/core.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(
            extract_text(ResumeKind::Docx, &bytes),
            Err(ExtractError::Docx(_))
        ));
    }

    #[test]
    fn test_garbage_is_not_a_docx() {
        assert!(extract_text(ResumeKind::Docx, b"not a zip").is_err());
    }
}
