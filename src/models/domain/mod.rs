pub mod puzzle;
pub mod question;
pub mod trivia;
pub use puzzle::{CrosswordClue, CrosswordPuzzle, WordSearchClue, WordSearchQuiz};
pub use question::{QuestionRecord, QuestionType};
pub use trivia::{DailyTriviaSet, TriviaQuestion};
