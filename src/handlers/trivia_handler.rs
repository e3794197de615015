use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::DailyTriviaRequest};

/// An empty body means the default topic and difficulty; anything else must
/// be a valid JSON request.
fn parse_request(body: &[u8]) -> Result<DailyTriviaRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DailyTriviaRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid JSON body: {}", e)))
}

/// Returns today's trivia set, generating and storing it on the first call of the day.
#[post("/daily-trivia/generate")]
pub async fn generate_daily_trivia(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request = parse_request(&body)?;
    request.validate()?;

    let response = state.daily_trivia_service.get_or_generate(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}
