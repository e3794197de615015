use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::upload::UploadedFile,
    services::{docx_extractor::DocumentTextExtractor, ocr_provider::OcrProvider},
};

/// Turns uploaded files into plain text: images through OCR, `.docx` through
/// the document extractor, and text files as UTF-8.
pub struct DocumentService {
    ocr: Arc<dyn OcrProvider>,
    extractor: Arc<dyn DocumentTextExtractor>,
}

impl DocumentService {
    pub fn new(ocr: Arc<dyn OcrProvider>, extractor: Arc<dyn DocumentTextExtractor>) -> Self {
        Self { ocr, extractor }
    }

    /// OCR for images only; jpg, jpeg and png are accepted.
    pub async fn image_text(&self, file: &UploadedFile) -> AppResult<String> {
        match file.extension().as_deref() {
            Some("jpg" | "jpeg" | "png") => {}
            _ => {
                return Err(AppError::ValidationError(
                    "Only .jpg, .jpeg and .png images are supported".to_string(),
                ))
            }
        }

        log::info!(
            "Running OCR on {} ({} bytes)",
            file.filename,
            file.bytes.len()
        );
        self.ocr
            .extract_text(file.bytes.clone(), image_content_type(file))
            .await
    }

    pub async fn text_from_upload(&self, file: &UploadedFile) -> AppResult<String> {
        if file.is_image() {
            self.image_text(file).await
        } else if file.is_docx() {
            self.extractor.extract(&file.bytes)
        } else if file.is_plain_text() {
            String::from_utf8(file.bytes.clone()).map_err(|_| {
                AppError::ValidationError("Uploaded text file is not valid UTF-8".to_string())
            })
        } else {
            Err(AppError::ValidationError(format!(
                "Unsupported file type: {}",
                file.filename
            )))
        }
    }

    /// Joins typed text with text read from an optional upload, blank parts dropped.
    pub async fn combined_text(
        &self,
        text: Option<&str>,
        file: Option<&UploadedFile>,
    ) -> AppResult<String> {
        let mut parts = Vec::with_capacity(2);
        if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
            parts.push(text.to_string());
        }
        if let Some(file) = file {
            let extracted = self.text_from_upload(file).await?;
            let extracted = extracted.trim();
            if !extracted.is_empty() {
                parts.push(extracted.to_string());
            }
        }
        Ok(parts.join("\n\n"))
    }
}

fn image_content_type(file: &UploadedFile) -> String {
    if file.content_type.starts_with("image/") {
        return file.content_type.clone();
    }
    match file.extension().as_deref() {
        Some("png") => "image/png".to_string(),
        _ => "image/jpeg".to_string(),
    }
}
