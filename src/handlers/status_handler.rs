use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::app_state::AppState;

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "QuizRush API is running",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports which provider credentials are configured, never their values.
#[get("/api/test")]
pub async fn api_test(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "API is working",
        "env": {
            "hasOpenAI": state.config.has_openai_key(),
            "hasIdentity": state.config.has_identity_credentials()
        }
    }))
}
