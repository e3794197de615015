use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub quiz_model: String,
    pub trivia_model: String,
    pub crossword_model: String,
    pub wordsearch_model: String,
    pub ocr_endpoint: String,
    pub ocr_key: SecretString,
    pub ocr_poll_interval_ms: u64,
    pub ocr_max_polls: u32,
    pub identity_api_base: String,
    pub identity_project_id: String,
    pub identity_admin_token: SecretString,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub daily_trivia_collection: String,
    pub max_upload_bytes: usize,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_var_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: var_or("WEB_SERVER_HOST", "localhost"),
            web_server_port: parsed_var_or("WEB_SERVER_PORT", 5000),
            openai_api_key: SecretString::from(var_or("OPENAI_API_KEY", "")),
            openai_api_base: env::var("OPENAI_API_BASE").ok().filter(|v| !v.is_empty()),
            quiz_model: var_or("QUIZ_MODEL", "gpt-3.5-turbo"),
            trivia_model: var_or("TRIVIA_MODEL", "gpt-4"),
            crossword_model: var_or("CROSSWORD_MODEL", "gpt-4"),
            wordsearch_model: var_or("WORDSEARCH_MODEL", "gpt-4o"),
            ocr_endpoint: var_or("AZURE_OCR_ENDPOINT", ""),
            ocr_key: SecretString::from(var_or("AZURE_OCR_KEY", "")),
            ocr_poll_interval_ms: parsed_var_or("OCR_POLL_INTERVAL_MS", 1000),
            ocr_max_polls: parsed_var_or("OCR_MAX_POLLS", 10),
            identity_api_base: var_or(
                "IDENTITY_API_BASE",
                "https://identitytoolkit.googleapis.com",
            ),
            identity_project_id: var_or("IDENTITY_PROJECT_ID", ""),
            identity_admin_token: SecretString::from(var_or("IDENTITY_ADMIN_TOKEN", "")),
            mongo_conn_string: var_or("MONGO_CONN_STRING", "mongodb://localhost:27017"),
            mongo_db_name: var_or("MONGO_DB_NAME", "quizrush-local"),
            daily_trivia_collection: var_or("DAILY_TRIVIA_COLLECTION", "dailyTrivia"),
            max_upload_bytes: parsed_var_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
        }
    }

    pub fn ocr_poll_interval(&self) -> Duration {
        Duration::from_millis(self.ocr_poll_interval_ms)
    }

    pub fn has_openai_key(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.openai_api_key.expose_secret().is_empty()
    }

    pub fn has_identity_credentials(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.identity_project_id.is_empty() && !self.identity_admin_token.expose_secret().is_empty()
    }

    /// Rejects configuration that cannot serve any generation request.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if !self.has_openai_key() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is not set. Set it before starting the server.".to_string(),
            ));
        }

        if self.ocr_max_polls == 0 {
            return Err(AppError::InternalError(
                "OCR_MAX_POLLS must be at least 1.".to_string(),
            ));
        }

        if self.ocr_endpoint.is_empty() {
            log::warn!("AZURE_OCR_ENDPOINT is not set; /extract-text will fail");
        }
        if !self.has_identity_credentials() {
            log::warn!("Identity provider credentials are not set; user management will fail");
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            openai_api_key: SecretString::from("test-openai-key".to_string()),
            openai_api_base: None,
            quiz_model: "quiz-model".to_string(),
            trivia_model: "trivia-model".to_string(),
            crossword_model: "crossword-model".to_string(),
            wordsearch_model: "wordsearch-model".to_string(),
            ocr_endpoint: "http://localhost:9999".to_string(),
            ocr_key: SecretString::from("ocr-key".to_string()),
            ocr_poll_interval_ms: 1,
            ocr_max_polls: 3,
            identity_api_base: "http://localhost:9998".to_string(),
            identity_project_id: "quizrush-test".to_string(),
            identity_admin_token: SecretString::from("admin-token".to_string()),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizrush-test".to_string(),
            daily_trivia_collection: "dailyTrivia".to_string(),
            max_upload_bytes: 1024 * 1024,
        }
    }
}
