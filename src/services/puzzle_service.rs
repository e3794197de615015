use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    constants::prompts::{word_list_prompt, word_search_prompt, CROSSWORD_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{
            puzzle::blank_grid, CrosswordClue, CrosswordPuzzle, WordSearchClue, WordSearchQuiz,
        },
        lenient::{lenient_grid, lenient_string, lenient_string_list},
    },
    quiz::{unwrap_json, unwrap_json_object},
    services::completion_provider::{CompletionProvider, CompletionRequest},
};

pub const DEFAULT_WORD_SEARCH_TITLE: &str = "Word Search Quiz";

static WORD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]+").expect("WORD_SEPARATOR is a valid regex pattern"));

#[derive(Debug, Deserialize)]
struct CrosswordReply {
    #[serde(default, deserialize_with = "lenient_grid")]
    grid: Option<Vec<Vec<String>>>,
    #[serde(default)]
    clues: Vec<CrosswordClue>,
}

#[derive(Debug, Deserialize)]
struct WordSearchReply {
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default)]
    questions: Vec<WordSearchClue>,
}

#[derive(Debug, Deserialize)]
struct WordListReply {
    #[serde(default, deserialize_with = "lenient_string_list")]
    words: Vec<String>,
}

pub struct PuzzleModels {
    pub crossword: String,
    pub word_search: String,
}

pub struct PuzzleService {
    completion: Arc<dyn CompletionProvider>,
    models: PuzzleModels,
}

impl PuzzleService {
    pub fn new(completion: Arc<dyn CompletionProvider>, models: PuzzleModels) -> Self {
        Self { completion, models }
    }

    pub async fn generate_crossword(&self) -> AppResult<CrosswordPuzzle> {
        let reply = self
            .completion
            .complete(CompletionRequest::new(
                self.models.crossword.clone(),
                CROSSWORD_PROMPT,
            ))
            .await?;

        let parsed: CrosswordReply = unwrap_json_object(&reply)?;
        let grid = match parsed.grid {
            Some(grid) if !grid.is_empty() => grid,
            _ => {
                log::warn!("Crossword reply had no grid; substituting a blank one");
                blank_grid()
            }
        };

        Ok(CrosswordPuzzle {
            grid,
            clues: parsed.clues,
        })
    }

    pub async fn generate_word_search(
        &self,
        title: Option<&str>,
        content: &str,
    ) -> AppResult<WordSearchQuiz> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Provide words, text or a file to build the word search from".to_string(),
            ));
        }

        let title = title.map(str::trim).filter(|t| !t.is_empty());
        let prompt = word_search_prompt(title.unwrap_or(DEFAULT_WORD_SEARCH_TITLE), content);
        let reply = self
            .completion
            .complete(CompletionRequest::new(self.models.word_search.clone(), prompt))
            .await?;

        let parsed: WordSearchReply = unwrap_json_object(&reply)?;
        let reply_title = parsed.title.trim();
        let title = if !reply_title.is_empty() {
            reply_title.to_string()
        } else {
            title.unwrap_or(DEFAULT_WORD_SEARCH_TITLE).to_string()
        };

        Ok(WordSearchQuiz {
            title,
            questions: parsed.questions,
        })
    }

    /// Returns exactly `count` distinct upper-case words, or fails if the
    /// provider came up short.
    pub async fn generate_word_list(
        &self,
        title: &str,
        description: &str,
        count: u32,
    ) -> AppResult<Vec<String>> {
        let reply = self
            .completion
            .complete(
                CompletionRequest::new(
                    self.models.word_search.clone(),
                    word_list_prompt(title, description, count),
                )
                .with_temperature(0.5),
            )
            .await?;

        let mut words = distinct_words(parse_word_list(&reply));
        let wanted = count as usize;
        if words.len() < wanted {
            return Err(AppError::ProviderError {
                message: "AI did not return enough words.".to_string(),
                details: Some(format!(
                    "Requested {}, received {}: {}",
                    wanted,
                    words.len(),
                    words.join(", ")
                )),
            });
        }

        words.truncate(wanted);
        Ok(words)
    }
}

/// JSON `{words}` (or a bare array) when available, otherwise a separated list.
fn parse_word_list(reply: &str) -> Vec<String> {
    if let Ok(parsed) = unwrap_json_object::<WordListReply>(reply) {
        return parsed.words;
    }
    if let Ok(words) = unwrap_json::<Vec<String>>(reply) {
        return words;
    }

    log::debug!("Word list reply was not JSON; splitting on separators");
    WORD_SEPARATOR
        .split(reply)
        .map(str::to_string)
        .collect()
}

fn distinct_words(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| word.trim().trim_matches('"').trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
