use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};
use validator::Validate;

use crate::{
    errors::AppError,
    models::dto::request::ExportPdfRequest,
    services::report_service::{filename_slug, render_results_pdf},
};

#[post("/export-pdf")]
pub async fn export_pdf(request: web::Json<ExportPdfRequest>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let title = request.title().to_string();
    let filename = format!("{}.pdf", filename_slug(&title));

    // Rendering is CPU-bound; keep it off the async workers.
    let pdf = web::block(move || render_results_pdf(&title, &request.rows))
        .await
        .map_err(|e| AppError::InternalError(format!("PDF rendering was cancelled: {}", e)))??;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(pdf))
}
