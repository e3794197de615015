use actix_multipart::Multipart;
use actix_web::{post, web, Either, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::multipart::read_form,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateCustomQuizRequest, GenerateQuizRequest},
        response::{CustomQuizResponse, QuizResponse},
    },
    services::QuizPlan,
};

/// Accepts either a JSON body or a multipart form with an optional `file`
/// whose text is appended to `text`.
#[post("/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Either<web::Json<GenerateQuizRequest>, Multipart>,
) -> Result<HttpResponse, AppError> {
    let (request, file) = match body {
        Either::Left(json) => (json.into_inner(), None),
        Either::Right(payload) => {
            let form = read_form(payload, state.config.max_upload_bytes).await?;
            (GenerateQuizRequest::from_form(&form)?, form.file)
        }
    };
    request.validate()?;
    let categories = QuizPlan::categories_for(&request)?;

    let topic = state
        .document_service
        .combined_text(request.text.as_deref(), file.as_ref())
        .await?;
    let plan = QuizPlan::for_topic(topic, request.difficulty.trim().to_string(), categories)?;
    let questions = state.quiz_service.generate(&plan).await?;
    log::info!(
        "[{}] generated {} of {} requested questions",
        get_request_id(&req).unwrap_or_default(),
        questions.len(),
        plan.total()
    );

    Ok(HttpResponse::Ok().json(QuizResponse {
        questions,
        created_by: request.created_by,
    }))
}

#[post("/generate-custom-quiz")]
pub async fn generate_custom_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateCustomQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let plan = QuizPlan::from_custom(&request)?;
    let questions = state.quiz_service.generate(&plan).await?;

    Ok(HttpResponse::Ok().json(CustomQuizResponse {
        title: plan.topic,
        difficulty: plan.difficulty,
        questions,
        created_by: request.created_by,
    }))
}
