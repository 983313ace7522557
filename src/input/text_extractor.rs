//! Text extraction from various file formats

use crate::error::{Result, ResumeInsightError};
use crate::input::file_detector::FileType;
use pulldown_cmark::{html, Parser};
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        extract_pdf(&bytes).map_err(|e| {
            ResumeInsightError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Extract plain text from raw bytes plus a content-type hint.
///
/// This is the contract transport layers program against: they hand over
/// whatever was uploaded and a MIME-ish hint, and get text or an error.
pub fn extract_from_bytes(bytes: &[u8], hint: &str) -> Result<String> {
    match FileType::from_hint(hint) {
        FileType::Pdf => extract_pdf(bytes)
            .map_err(|e| ResumeInsightError::PdfExtraction(format!("Failed to extract PDF: {}", e))),
        FileType::Markdown => {
            let content = String::from_utf8_lossy(bytes);
            Ok(markdown_to_text(&content))
        }
        FileType::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
        FileType::Unknown => Err(ResumeInsightError::UnsupportedFormat(format!(
            "Unsupported content type: {}",
            hint
        ))),
    }
}

fn extract_pdf(bytes: &[u8]) -> std::result::Result<String, pdf_extract::OutputError> {
    pdf_extract::extract_text_from_mem(bytes)
}

/// Render markdown to HTML, then strip tags back to plain text.
fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_to_text(&html_output)
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let re = regex::Regex::new(r"<[^>]*>").expect("tag regex");
    let clean_text = re.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}
