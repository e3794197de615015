use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

const DOCUMENT_PART: &str = "word/document.xml";

/// Text runs and paragraph/line breaks, in document order.
static RUN_OR_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:br\s*/>|<w:tab\s*/>")
        .expect("docx run pattern is valid")
});

/// Named XML entities and decimal or hex character references.
static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(lt|gt|quot|apos|amp|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("entity pattern is valid")
});

#[cfg_attr(test, mockall::automock)]
pub trait DocumentTextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> AppResult<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTextExtractor;

impl DocumentTextExtractor for DocxTextExtractor {
    fn extract(&self, bytes: &[u8]) -> AppResult<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| AppError::ValidationError(format!("Not a valid .docx file: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| AppError::ValidationError(format!("Not a valid .docx file: {}", e)))?
            .read_to_string(&mut xml)
            .map_err(|e| AppError::ValidationError(format!("Unreadable .docx body: {}", e)))?;

        Ok(document_text(&xml))
    }
}

fn document_text(xml: &str) -> String {
    let mut text = String::new();
    for capture in RUN_OR_BREAK.captures_iter(xml) {
        match capture.get(1) {
            Some(run) => text.push_str(&unescape(run.as_str())),
            None if capture[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text.trim().to_string()
}

fn unescape(raw: &str) -> String {
    ENTITY
        .replace_all(raw, |caps: &regex::Captures| {
            let name = &caps[1];
            let decoded = match name {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                _ => name
                    .strip_prefix("#x")
                    .or_else(|| name.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| name[1..].parse())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) fn docx_bytes(body_xml: &str) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(DOCUMENT_PART, SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
                body_xml
            )
            .as_bytes(),
        )
        .unwrap();
    writer.finish().unwrap().into_inner()
}
