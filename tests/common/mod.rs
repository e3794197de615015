#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizrush_server::{
    app_state::{AppState, Providers},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::DailyTriviaSet,
    repositories::DailyTriviaRepository,
    services::{
        CompletionProvider, CompletionRequest, DocxTextExtractor, IdentityProvider, OcrProvider,
    },
};

pub const MC_REPLY: &str = r#"```json
[
  {"question": "Which gas do plants absorb?", "options": ["A. Oxygen", "B. Carbon dioxide", "C. Nitrogen", "D. Helium"], "answer": "B. Carbon dioxide"},
  {"question": "Where is chlorophyll found?", "options": ["A) Roots", "B) Chloroplasts", "C) Bark", "D) Seeds"], "answer": "chloroplasts"},
  {"question": "What do plants release?", "options": ["A. Oxygen", "B. oxygen", "C. Smoke", "D. Water"], "answer": "A"}
]
```"#;

pub const TF_REPLY: &str = r#"{"questions": [{"question": "Photosynthesis needs light.", "answer": "TRUE"}, {"question": "Roots make sugar.", "answer": "no"}]}"#;

pub const TRIVIA_REPLY: &str = r#"[
  {"question": "Largest planet?", "mcqs": ["Mars", "Jupiter", "Venus", "Earth"], "correctAnswer": 1},
  {"question": "Closest star?", "mcqs": ["Sirius", "Vega", "The Sun", "Rigel"], "correctAnswer": "2"}
]"#;

/// Answers by prompt kind and counts calls.
#[derive(Default)]
pub struct ScriptedCompletion {
    pub calls: AtomicUsize,
    pub failing: bool,
}

impl ScriptedCompletion {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::provider(
                "Text generation provider call failed",
                "rate limited",
            ));
        }

        let reply = if request.system.is_some() {
            TRIVIA_REPLY
        } else if request.prompt.contains("true/false") {
            TF_REPLY
        } else if request.prompt.contains("multiple-choice") {
            MC_REPLY
        } else if request.prompt.contains("crossword") {
            r#"{"clues": [{"number": 1, "hint": "Red planet", "answer": "MARS", "direction": "down", "start": 3}]}"#
        } else if request.prompt.contains("\"words\"") {
            r#"{"words": ["Mercury", "Venus", "Earth", "Mars"]}"#
        } else {
            r#"{"title": "", "questions": [{"question": "Fourth planet", "answer": "Mars"}]}"#
        };
        Ok(reply.to_string())
    }
}

pub struct FakeOcr {
    pub result: AppResult<String>,
    pub calls: AtomicUsize,
}

impl FakeOcr {
    pub fn returning(result: AppResult<String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrProvider for FakeOcr {
    async fn extract_text(&self, _image: Vec<u8>, _content_type: String) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Accounts keyed by uid; emails must be unique.
#[derive(Default)]
pub struct InMemoryIdentity {
    pub accounts: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn create_user(&self, email: String, _password: String) -> AppResult<String> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|existing| existing == &email) {
            return Err(AppError::ValidationError("EMAIL_EXISTS".to_string()));
        }
        let uid = format!("uid-{}", accounts.len() + 1);
        accounts.insert(uid.clone(), email);
        Ok(uid)
    }

    async fn delete_user(&self, uid: String) -> AppResult<()> {
        self.accounts
            .write()
            .await
            .remove(&uid)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User not found: {}", uid)))
    }

    async fn update_email(&self, uid: String, email: String) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        let slot = accounts
            .get_mut(&uid)
            .ok_or_else(|| AppError::NotFound(format!("User not found: {}", uid)))?;
        *slot = email;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTriviaRepository {
    pub sets: Arc<RwLock<HashMap<String, DailyTriviaSet>>>,
}

#[async_trait]
impl DailyTriviaRepository for InMemoryTriviaRepository {
    async fn find_by_date(&self, date: &str) -> AppResult<Option<DailyTriviaSet>> {
        Ok(self.sets.read().await.get(date).cloned())
    }

    async fn insert_if_absent(&self, set: DailyTriviaSet) -> AppResult<Option<DailyTriviaSet>> {
        let mut sets = self.sets.write().await;
        if let Some(existing) = sets.get(&set.date) {
            return Ok(Some(existing.clone()));
        }
        sets.insert(set.date.clone(), set);
        Ok(None)
    }
}

/// Independent of the caller's environment; identity credentials are left
/// unset so `/api/test` reports them missing.
pub fn fixed_config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        openai_api_key: SecretString::from("integration-openai-key".to_string()),
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
        identity_project_id: String::new(),
        identity_admin_token: SecretString::from(String::new()),
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quizrush-integration".to_string(),
        daily_trivia_collection: "dailyTrivia".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

pub struct Fakes {
    pub completion: Arc<ScriptedCompletion>,
    pub ocr: Arc<FakeOcr>,
    pub identity: Arc<InMemoryIdentity>,
    pub trivia: Arc<InMemoryTriviaRepository>,
}

impl Default for Fakes {
    fn default() -> Self {
        Self {
            completion: Arc::new(ScriptedCompletion::default()),
            ocr: Arc::new(FakeOcr::returning(Ok(
                "Mitochondria\nis the powerhouse".to_string()
            ))),
            identity: Arc::new(InMemoryIdentity::default()),
            trivia: Arc::new(InMemoryTriviaRepository::default()),
        }
    }
}

impl Fakes {
    pub fn state(&self) -> AppState {
        AppState::with_providers(
            fixed_config(),
            Providers {
                completion: self.completion.clone(),
                ocr: self.ocr.clone(),
                identity: self.identity.clone(),
                extractor: Arc::new(DocxTextExtractor),
                trivia_repository: self.trivia.clone(),
            },
        )
    }
}

pub const BOUNDARY: &str = "quizrush-integration-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, filename, content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
