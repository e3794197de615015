use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::multipart::read_form,
    models::dto::{request::WordListRequest, response::WordListResponse},
};

#[get("/generate-crossword-clues")]
pub async fn generate_crossword(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let puzzle = state.puzzle_service.generate_crossword().await?;
    Ok(HttpResponse::Ok().json(puzzle))
}

/// Multipart: `title`, `words` (free text) and an optional `file`.
#[post("/wordsearch/generate")]
pub async fn generate_word_search(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_form(payload, state.config.max_upload_bytes).await?;
    let typed = form.text("words").or_else(|| form.text("text"));

    let content = state
        .document_service
        .combined_text(typed, form.file.as_ref())
        .await?;
    let quiz = state
        .puzzle_service
        .generate_word_search(form.text("title"), &content)
        .await?;

    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/wordsearch/generate-words")]
pub async fn generate_word_list(
    state: web::Data<AppState>,
    request: web::Json<WordListRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let words = state
        .puzzle_service
        .generate_word_list(request.title(), request.description.trim(), request.word_count())
        .await?;
    Ok(HttpResponse::Ok().json(WordListResponse { words }))
}
