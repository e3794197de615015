use serde::{Deserialize, Serialize};

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuestionType {
    #[serde(rename = "tf")]
    TrueFalse,
    #[serde(rename = "mc")]
    MultipleChoice,
}

impl QuestionType {
    pub fn as_code(&self) -> &'static str {
        match self {
            QuestionType::TrueFalse => "tf",
            QuestionType::MultipleChoice => "mc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tf" | "true-false" | "truefalse" => Some(QuestionType::TrueFalse),
            "mc" | "mcq" | "multiple-choice" => Some(QuestionType::MultipleChoice),
            _ => None,
        }
    }
}

/// One normalized quiz question as returned to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question_type: QuestionType,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub answer_text: String,
    #[serde(
        rename = "cognitiveLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cognitive_level: Option<String>,
    #[serde(rename = "topicArea", default, skip_serializing_if = "Option::is_none")]
    pub topic_area: Option<String>,
}

impl QuestionRecord {
    pub fn with_labels(mut self, cognitive_level: Option<&str>, topic_area: Option<&str>) -> Self {
        self.cognitive_level = cognitive_level.map(str::to_string);
        self.topic_area = topic_area.map(str::to_string);
        self
    }
}
