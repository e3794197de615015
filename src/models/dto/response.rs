use serde::Serialize;

use crate::models::domain::{QuestionRecord, TriviaQuestion};

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuestionRecord>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomQuizResponse {
    pub title: String,
    pub difficulty: String,
    pub questions: Vec<QuestionRecord>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyTriviaResponse {
    pub message: String,
    pub questions: Vec<TriviaQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordListResponse {
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub uid: String,
}
