use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::quiz::reshaper::RawQuestion;

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[A-Za-z0-9_-]*").expect("CODE_FENCE is a valid regex pattern"));

/// Provider text that could not be read as JSON.
#[derive(Debug, Clone, Error)]
#[error("provider reply is not valid JSON: {reason}")]
pub struct ParseError {
    pub raw: String,
    pub reason: String,
}

pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

pub fn unwrap_json<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|err| ParseError {
        raw: raw.to_string(),
        reason: err.to_string(),
    })
}

/// Like [`unwrap_json`], but ignores any chatter before the first `{`.
pub fn unwrap_json_object<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let start = raw.find('{').ok_or_else(|| ParseError {
        raw: raw.to_string(),
        reason: "no JSON object found".to_string(),
    })?;
    unwrap_json(&raw[start..]).map_err(|err| ParseError {
        raw: raw.to_string(),
        ..err
    })
}

/// Question items from either a bare array or an object with a `questions` array.
pub fn unwrap_questions(raw: &str) -> Result<Vec<RawQuestion>, ParseError> {
    let value: serde_json::Value = unwrap_json(raw)?;
    let items = match value {
        serde_json::Value::Object(mut map) => map
            .remove("questions")
            .unwrap_or(serde_json::Value::Null),
        other => other,
    };

    serde_json::from_value(items).map_err(|err| ParseError {
        raw: raw.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::question::QuestionType;
    use crate::quiz::reshaper::reshape;

    #[test]
    fn fenced_reply_parses_to_one_true_false_record() {
        let raw = "```json\n[{\"question\":\"Q\",\"answer\":\"True\"}]\n```";
        let items = unwrap_questions(raw).unwrap();
        assert_eq!(items.len(), 1);

        let record = reshape(&items[0], QuestionType::TrueFalse);
        assert_eq!(record.prompt, "Q");
        assert_eq!(record.answer_text, "True");
        assert_eq!(record.options, vec!["True", "False"]);
    }

    #[test]
    fn fence_variants_all_unwrap_to_the_same_items() {
        let body = r#"[{"question":"Q1","answer":"True"},{"question":"Q2","answer":"False"}]"#;
        let variants = [
            body.to_string(),
            format!("```json\n{}\n```", body),
            format!("```JSON\n{}\n```\n", body),
            format!("  ```\n{}```  ", body),
            format!("```javascript\n{}", body),
            format!("{}\n```", body),
        ];

        for raw in &variants {
            let items = unwrap_questions(raw).unwrap();
            assert_eq!(items.len(), 2, "{:?}", raw);
            assert_eq!(items[1].question, "Q2", "{:?}", raw);
        }
    }

    #[test]
    fn fences_without_language_tag_are_removed() {
        let value: serde_json::Value = unwrap_json("```\n{\"words\":[\"SUN\"]}\n```").unwrap();
        assert_eq!(value["words"][0], "SUN");
    }

    #[test]
    fn questions_wrapper_object_is_accepted() {
        let items =
            unwrap_questions(r#"{"questions":[{"question":"A","answer":"x"},{"question":"B"}]}"#)
                .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].question, "B");
    }

    #[test]
    fn non_json_reply_carries_the_offending_text() {
        let err = unwrap_json::<serde_json::Value>("```json\nSorry, I cannot help.\n```").unwrap_err();
        assert!(err.raw.contains("Sorry, I cannot help."));
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn object_without_questions_is_a_parse_error() {
        assert!(unwrap_questions(r#"{"items":[]}"#).is_err());
    }

    #[test]
    fn object_unwrap_skips_leading_prose() {
        let value: serde_json::Value =
            unwrap_json_object("Here is your puzzle:\n```json\n{\"clues\":[]}\n```").unwrap();
        assert!(value["clues"].as_array().unwrap().is_empty());

        assert!(unwrap_json_object::<serde_json::Value>("no braces here").is_err());
    }
}
