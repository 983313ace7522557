//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Map a MIME-ish content-type hint to a file type.
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.to_lowercase();
        if hint.contains("pdf") {
            FileType::Pdf
        } else if hint.contains("markdown") {
            FileType::Markdown
        } else if hint.contains("text") || hint.contains("plain") {
            FileType::Text
        } else {
            FileType::Unknown
        }
    }
}
