use actix_multipart::Multipart;
use futures::TryStreamExt;

use crate::{
    errors::{AppError, AppResult},
    models::dto::upload::{FormData, UploadedFile},
};

/// Buffers a multipart body: text fields by name, plus the first non-empty
/// file part. Any single part larger than `max_bytes` is rejected.
pub async fn read_form(mut payload: Multipart, max_bytes: usize) -> AppResult<FormData> {
    let mut form = FormData::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::ValidationError(format!(
                    "Field '{}' exceeds the {} byte upload limit",
                    name, max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(filename) if !filename.is_empty() => {
                if form.file.is_none() && !bytes.is_empty() {
                    form.file = Some(UploadedFile {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            // Browsers send an empty file part when no file was picked.
            Some(_) => {}
            None => form.push_field(&name, String::from_utf8_lossy(&bytes).into_owned()),
        }
    }

    Ok(form)
}
