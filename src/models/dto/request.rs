use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::dto::upload::FormData;
use crate::models::lenient::{
    lenient_count, lenient_optional_count, lenient_string, one_or_many, parse_count_str,
};

pub const DEFAULT_DIFFICULTY: &str = "Easy";

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

/// Question counts for one slice of a multi-topic or multi-level quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAllocation {
    #[serde(default)]
    pub topic_area: Option<String>,
    #[serde(default)]
    pub cognitive_level: Option<String>,
    #[validate(range(max = 50))]
    #[serde(default, deserialize_with = "lenient_count")]
    pub mc_questions: u32,
    #[validate(range(max = 50))]
    #[serde(default, deserialize_with = "lenient_count")]
    pub tf_questions: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub quiz_type: Vec<String>,
    #[validate(range(max = 50))]
    #[serde(default, deserialize_with = "lenient_count")]
    pub mc_questions: u32,
    #[validate(range(max = 50))]
    #[serde(default, deserialize_with = "lenient_count")]
    pub tf_questions: u32,
    #[validate(length(min = 1, max = 50))]
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default, rename = "created_by")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub cognitive_level: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub breakdown: Vec<QuestionAllocation>,
}

impl GenerateQuizRequest {
    /// Builds the request from multipart text fields; `breakdown` arrives as a JSON string.
    pub fn from_form(form: &FormData) -> AppResult<Self> {
        let breakdown = match form.text("breakdown") {
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                AppError::ValidationError(format!("breakdown must be a JSON array: {}", e))
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            text: form.text("text").map(str::to_string),
            quiz_type: form.all("quizType"),
            mc_questions: form.text("mcQuestions").map(parse_count_str).unwrap_or(0),
            tf_questions: form.text("tfQuestions").map(parse_count_str).unwrap_or(0),
            difficulty: form
                .text("difficulty")
                .map(str::to_string)
                .unwrap_or_else(default_difficulty),
            created_by: form.text("created_by").map(str::to_string),
            cognitive_level: form.text("cognitiveLevel").map(str::to_string),
            breakdown,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCustomQuizRequest {
    #[validate(length(min = 1, message = "Missing quiz title or difficulty."))]
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1, message = "Missing quiz title or difficulty."))]
    #[serde(default)]
    pub difficulty: String,
    #[validate(range(max = 50))]
    #[serde(default, rename = "mcqCount", deserialize_with = "lenient_count")]
    pub mcq_count: u32,
    #[validate(range(max = 50))]
    #[serde(default, rename = "tfCount", deserialize_with = "lenient_count")]
    pub tf_count: u32,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DailyTriviaRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(default = "default_trivia_topic")]
    pub topic: String,
    #[validate(length(min = 1, max = 50))]
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_trivia_topic() -> String {
    "General Knowledge".to_string()
}

impl Default for DailyTriviaRequest {
    fn default() -> Self {
        Self {
            topic: default_trivia_topic(),
            difficulty: default_difficulty(),
        }
    }
}

pub const DEFAULT_WORD_COUNT: u32 = 15;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WordListRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required."))]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, max = 100))]
    #[serde(default, deserialize_with = "lenient_optional_count")]
    pub num_words: Option<u32>,
}

impl WordListRequest {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
    }

    pub fn word_count(&self) -> u32 {
        self.num_words.unwrap_or(DEFAULT_WORD_COUNT)
    }
}

/// One submitted quiz attempt in a results export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quiz_title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub percent: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitted_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportPdfRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "No rows to export."))]
    #[serde(default)]
    pub rows: Vec<ResultRow>,
}

impl ExportPdfRequest {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Quiz Results")
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailRequest {
    #[validate(length(min = 1, message = "uid is required"))]
    pub uid: String,

    #[validate(email(message = "Invalid email format"))]
    pub new_email: String,
}
