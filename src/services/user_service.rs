use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{
        request::{CreateUserRequest, UpdateEmailRequest},
        response::{CreateUserResponse, MessageResponse},
    },
    services::identity_provider::IdentityProvider,
};

pub struct UserService {
    identity: Arc<dyn IdentityProvider>,
}

impl UserService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        request.validate()?;

        let uid = self
            .identity
            .create_user(request.email.trim().to_string(), request.password)
            .await?;

        log::info!("Created user {}", uid);
        Ok(CreateUserResponse {
            message: "User created successfully".to_string(),
            uid,
        })
    }

    pub async fn delete_user(&self, uid: &str) -> AppResult<MessageResponse> {
        let uid = uid.trim();
        if uid.is_empty() {
            return Err(AppError::ValidationError("uid is required".to_string()));
        }

        self.identity.delete_user(uid.to_string()).await?;

        log::info!("Deleted user {}", uid);
        Ok(MessageResponse::new("User deleted successfully"))
    }

    pub async fn update_email(&self, request: UpdateEmailRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        self.identity
            .update_email(
                request.uid.trim().to_string(),
                request.new_email.trim().to_string(),
            )
            .await?;

        log::info!("Updated email for user {}", request.uid);
        Ok(MessageResponse::new("Email updated successfully"))
    }
}
