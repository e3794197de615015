use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    constants::prompts::{daily_trivia_prompt, TRIVIA_SYSTEM_PROMPT},
    errors::AppResult,
    models::{
        domain::{trivia::date_key, DailyTriviaSet, TriviaQuestion},
        dto::{request::DailyTriviaRequest, response::DailyTriviaResponse},
    },
    quiz::unwrap_json,
    repositories::DailyTriviaRepository,
    services::completion_provider::{CompletionProvider, CompletionRequest},
};

pub const TRIVIA_EXISTS: &str = "Trivia already exists";
pub const TRIVIA_GENERATED: &str = "Trivia generated and saved";

pub struct DailyTriviaService {
    completion: Arc<dyn CompletionProvider>,
    repository: Arc<dyn DailyTriviaRepository>,
    model: String,
}

impl DailyTriviaService {
    pub fn new(
        completion: Arc<dyn CompletionProvider>,
        repository: Arc<dyn DailyTriviaRepository>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            completion,
            repository,
            model: model.into(),
        }
    }

    pub async fn get_or_generate(&self, request: &DailyTriviaRequest) -> AppResult<DailyTriviaResponse> {
        self.get_or_generate_at(request, Utc::now()).await
    }

    pub async fn get_or_generate_at(
        &self,
        request: &DailyTriviaRequest,
        now: DateTime<Utc>,
    ) -> AppResult<DailyTriviaResponse> {
        let date = date_key(now);

        if let Some(existing) = self.repository.find_by_date(&date).await? {
            log::debug!("Serving cached trivia for {}", date);
            return Ok(cached(existing));
        }

        let questions = self.generate(request).await?;
        let set = DailyTriviaSet::new(
            date,
            request.topic.trim(),
            request.difficulty.trim(),
            questions,
        );

        // Another request may have stored the day's set while we were generating.
        match self.repository.insert_if_absent(set.clone()).await? {
            Some(existing) => Ok(cached(existing)),
            None => Ok(DailyTriviaResponse {
                message: TRIVIA_GENERATED.to_string(),
                questions: set.questions,
            }),
        }
    }

    async fn generate(&self, request: &DailyTriviaRequest) -> AppResult<Vec<TriviaQuestion>> {
        let prompt = daily_trivia_prompt(request.topic.trim(), request.difficulty.trim());
        let reply = self
            .completion
            .complete(CompletionRequest::new(self.model.clone(), prompt).with_system(TRIVIA_SYSTEM_PROMPT))
            .await?;

        let questions: Vec<TriviaQuestion> = unwrap_json(&reply)?;
        Ok(questions)
    }
}

fn cached(set: DailyTriviaSet) -> DailyTriviaResponse {
    DailyTriviaResponse {
        message: TRIVIA_EXISTS.to_string(),
        questions: set.questions,
    }
}
