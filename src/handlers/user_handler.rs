use actix_web::{delete, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateUserRequest, UpdateEmailRequest},
};

#[post("/create-user")]
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[delete("/delete-user/{uid}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    uid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.delete_user(&uid).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/user/update-email")]
pub async fn update_email(
    state: web::Data<AppState>,
    request: web::Json<UpdateEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.update_email(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
