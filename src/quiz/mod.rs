//! Pure normalization core for AI-generated quiz questions.
//!
//! Nothing here performs I/O; the services feed provider text in and get
//! [`QuestionRecord`](crate::models::domain::QuestionRecord)s out.

pub mod option_cleaner;
pub mod prompt;
pub mod reshaper;
pub mod shuffle;
pub mod unwrap;

pub use option_cleaner::clean_option;
pub use prompt::{question_prompt, PromptSpec};
pub use reshaper::{reshape, RawQuestion};
pub use shuffle::{shuffle_and_take, shuffle_selection};
pub use unwrap::{unwrap_json, unwrap_json_object, unwrap_questions, ParseError};
