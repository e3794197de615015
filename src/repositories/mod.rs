pub mod daily_trivia_repository;

pub use daily_trivia_repository::{DailyTriviaRepository, MongoDailyTriviaRepository};

#[cfg(test)]
pub use daily_trivia_repository::MockDailyTriviaRepository;
