use std::collections::HashMap;

/// A file received in a multipart body, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
            || matches!(self.extension().as_deref(), Some("jpg" | "jpeg" | "png"))
    }

    pub fn is_docx(&self) -> bool {
        self.content_type.contains("wordprocessingml") || self.extension().as_deref() == Some("docx")
    }

    pub fn is_plain_text(&self) -> bool {
        self.content_type.starts_with("text/")
            || matches!(self.extension().as_deref(), Some("txt" | "md"))
    }
}

/// Text fields and the first uploaded file of a multipart body.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
    pub file: Option<UploadedFile>,
}

impl FormData {
    pub fn push_field(&mut self, name: &str, value: String) {
        // Browsers send repeated fields as `quizType[]`.
        let name = name.strip_suffix("[]").unwrap_or(name);
        self.fields.entry(name.to_string()).or_default().push(value);
    }

    /// First non-blank value of a field, trimmed.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)?
            .iter()
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn all(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str) -> UploadedFile {
        UploadedFile {
            filename: name.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![],
        }
    }

    #[test]
    fn file_kind_detection() {
        assert!(file("scan.PNG", "application/octet-stream").is_image());
        assert!(file("photo", "image/jpeg").is_image());
        assert!(file("notes.docx", "application/octet-stream").is_docx());
        assert!(file("notes.txt", "text/plain").is_plain_text());
        assert!(!file("slides.pdf", "application/pdf").is_image());
        assert_eq!(file("archive.tar.GZ", "").extension().as_deref(), Some("gz"));
        assert_eq!(file("README", "").extension(), None);
    }

    #[test]
    fn repeated_and_bracketed_fields_are_merged() {
        let mut form = FormData::default();
        form.push_field("quizType[]", "mc".to_string());
        form.push_field("quizType[]", " tf ".to_string());
        form.push_field("text", "  ".to_string());
        form.push_field("text", " Cells ".to_string());

        assert_eq!(form.all("quizType"), vec!["mc", "tf"]);
        assert_eq!(form.text("text"), Some("Cells"));
        assert_eq!(form.text("missing"), None);
    }
}
