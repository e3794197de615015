use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::lenient::{lenient_string, lenient_string_list, lenient_count};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriviaQuestion {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub mcqs: Vec<String>,
    #[serde(rename = "correctAnswer", default, deserialize_with = "lenient_count")]
    pub correct_answer: u32,
}

/// The question set generated for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DailyTriviaSet {
    #[serde(rename = "_id")]
    pub date: String,
    pub topic: String,
    pub difficulty: String,
    pub questions: Vec<TriviaQuestion>,
    pub generated_at: DateTime<Utc>,
}

impl DailyTriviaSet {
    pub fn new(
        date: impl Into<String>,
        topic: impl Into<String>,
        difficulty: impl Into<String>,
        questions: Vec<TriviaQuestion>,
    ) -> Self {
        Self {
            date: date.into(),
            topic: topic.into(),
            difficulty: difficulty.into(),
            questions,
            generated_at: Utc::now(),
        }
    }
}

/// Storage key for a day: `YYYY-MM-DD` in UTC.
pub fn date_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}
