use serde::{Deserialize, Serialize};

use crate::models::lenient::{lenient_string, lenient_count};

pub const CROSSWORD_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CrosswordClue {
    #[serde(default, deserialize_with = "lenient_count")]
    pub number: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hint: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub start: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `grid` cells are `""` for open squares and `"B"` for black squares.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CrosswordPuzzle {
    pub grid: Vec<Vec<String>>,
    pub clues: Vec<CrosswordClue>,
}

pub fn blank_grid() -> Vec<Vec<String>> {
    vec![vec![String::new(); CROSSWORD_SIZE]; CROSSWORD_SIZE]
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordSearchClue {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordSearchQuiz {
    pub title: String,
    pub questions: Vec<WordSearchClue>,
}
