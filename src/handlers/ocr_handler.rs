use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::multipart::read_form,
    models::dto::response::ExtractTextResponse,
};

#[post("/extract-text")]
pub async fn extract_text(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_form(payload, state.config.max_upload_bytes).await?;
    let file = form
        .file
        .as_ref()
        .ok_or_else(|| AppError::ValidationError("No file uploaded".to_string()))?;

    let text = state.document_service.image_text(file).await?;
    Ok(HttpResponse::Ok().json(ExtractTextResponse { text }))
}
