use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    repositories::{DailyTriviaRepository, MongoDailyTriviaRepository},
    services::{
        AzureOcrProvider, CompletionProvider, DailyTriviaService, DocumentService,
        DocumentTextExtractor, DocxTextExtractor, IdentityProvider, OcrProvider,
        OpenAiCompletionProvider, PuzzleModels, PuzzleService, QuizService, RestIdentityProvider,
        UserService,
    },
};

/// External collaborators behind trait objects, so tests can swap in fakes.
#[derive(Clone)]
pub struct Providers {
    pub completion: Arc<dyn CompletionProvider>,
    pub ocr: Arc<dyn OcrProvider>,
    pub identity: Arc<dyn IdentityProvider>,
    pub extractor: Arc<dyn DocumentTextExtractor>,
    pub trivia_repository: Arc<dyn DailyTriviaRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub puzzle_service: Arc<PuzzleService>,
    pub daily_trivia_service: Arc<DailyTriviaService>,
    pub document_service: Arc<DocumentService>,
    pub user_service: Arc<UserService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP client setup failed: {}", e)))?;

        let providers = Providers {
            completion: Arc::new(OpenAiCompletionProvider::new(&config)),
            ocr: Arc::new(AzureOcrProvider::new(&config, http.clone())),
            identity: Arc::new(RestIdentityProvider::new(&config, http)),
            extractor: Arc::new(DocxTextExtractor),
            trivia_repository: Arc::new(MongoDailyTriviaRepository::new(&db, &config)),
        };

        Ok(Self::with_providers(config, providers))
    }

    pub fn with_providers(config: Config, providers: Providers) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            providers.completion.clone(),
            config.quiz_model.clone(),
        ));
        let puzzle_service = Arc::new(PuzzleService::new(
            providers.completion.clone(),
            PuzzleModels {
                crossword: config.crossword_model.clone(),
                word_search: config.wordsearch_model.clone(),
            },
        ));
        let daily_trivia_service = Arc::new(DailyTriviaService::new(
            providers.completion,
            providers.trivia_repository,
            config.trivia_model.clone(),
        ));
        let document_service = Arc::new(DocumentService::new(providers.ocr, providers.extractor));
        let user_service = Arc::new(UserService::new(providers.identity));

        Self {
            quiz_service,
            puzzle_service,
            daily_trivia_service,
            document_service,
            user_service,
            config: Arc::new(config),
        }
    }
}
