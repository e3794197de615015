pub mod completion_provider;
pub mod daily_trivia_service;
pub mod document_service;
pub mod docx_extractor;
pub mod identity_provider;
pub mod ocr_provider;
pub mod puzzle_service;
pub mod quiz_service;
pub mod report_service;
pub mod user_service;

pub use completion_provider::{CompletionProvider, CompletionRequest, OpenAiCompletionProvider};
pub use daily_trivia_service::DailyTriviaService;
pub use document_service::DocumentService;
pub use docx_extractor::{DocumentTextExtractor, DocxTextExtractor};
pub use identity_provider::{IdentityProvider, RestIdentityProvider};
pub use ocr_provider::{AzureOcrProvider, OcrProvider};
pub use puzzle_service::{PuzzleModels, PuzzleService};
pub use quiz_service::{QuizPlan, QuizService};
pub use user_service::UserService;
