use std::collections::HashSet;

use serde::Deserialize;

use crate::models::domain::question::{QuestionRecord, QuestionType, FALSE_LABEL, TRUE_LABEL};
use crate::models::lenient::{lenient_string, lenient_string_list};
use crate::quiz::option_cleaner::{clean_option, option_key};

/// A question item as the provider returned it, before normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub answer: String,
}

/// Letter label for a zero-based option position: 0 -> "A", 25 -> "Z", 26 -> "AA".
fn choice_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

pub fn reshape(raw: &RawQuestion, question_type: QuestionType) -> QuestionRecord {
    match question_type {
        QuestionType::TrueFalse => reshape_true_false(raw),
        QuestionType::MultipleChoice => reshape_multiple_choice(raw),
    }
}

pub fn reshape_true_false(raw: &RawQuestion) -> QuestionRecord {
    let answer = if raw.answer.trim().eq_ignore_ascii_case("true") {
        TRUE_LABEL
    } else {
        FALSE_LABEL
    };

    QuestionRecord {
        question_type: QuestionType::TrueFalse,
        prompt: raw.question.trim().to_string(),
        options: vec![TRUE_LABEL.to_string(), FALSE_LABEL.to_string()],
        answer_text: answer.to_string(),
        cognitive_level: None,
        topic_area: None,
    }
}

pub fn reshape_multiple_choice(raw: &RawQuestion) -> QuestionRecord {
    let mut seen = HashSet::new();
    let mut options = Vec::with_capacity(raw.options.len());
    let mut keys = Vec::with_capacity(raw.options.len());

    for option in &raw.options {
        let cleaned = clean_option(option);
        let key = cleaned.to_lowercase();
        if cleaned.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        options.push(format!("{}. {}", choice_letter(options.len()), cleaned));
        keys.push(key);
    }

    let answer_key = option_key(&raw.answer);
    let answer_text = match keys.iter().position(|key| *key == answer_key) {
        Some(index) => options[index].clone(),
        None => {
            log::debug!(
                "Answer {:?} matched no option, keeping the provider's text",
                raw.answer
            );
            raw.answer.trim().to_string()
        }
    };

    QuestionRecord {
        question_type: QuestionType::MultipleChoice,
        prompt: raw.question.trim().to_string(),
        options,
        answer_text,
        cognitive_level: None,
        topic_area: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc(question: &str, options: &[&str], answer: &str) -> RawQuestion {
        RawQuestion {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn tf(answer: &str) -> RawQuestion {
        RawQuestion {
            question: "  Plants need light.  ".to_string(),
            options: vec![],
            answer: answer.to_string(),
        }
    }

    #[test]
    fn answer_resolves_to_relabelled_option() {
        let record = reshape_multiple_choice(&mc("Capital of Italy?", &["A. Paris", "B. Rome"], "rome"));

        assert_eq!(record.options, vec!["A. Paris", "B. Rome"]);
        assert_eq!(record.answer_text, "B. Rome");
        assert_eq!(record.question_type, QuestionType::MultipleChoice);
    }

    #[test]
    fn duplicates_are_dropped_and_labels_have_no_gaps() {
        let record = reshape_multiple_choice(&mc(
            "Pick one",
            &["A. Oxygen", "B. oxygen", "C) Carbon", "D. Nitrogen", "carbon"],
            "D. Nitrogen",
        ));

        assert_eq!(record.options, vec!["A. Oxygen", "B. Carbon", "C. Nitrogen"]);
        assert_eq!(record.answer_text, "C. Nitrogen");
    }

    #[test]
    fn no_two_options_share_a_key() {
        let record = reshape_multiple_choice(&mc(
            "Q",
            &["a. x", "A. X", "b) y", "Y", "c. z", "d) Z", "w"],
            "w",
        ));

        let mut keys: Vec<String> = record.options.iter().map(|o| option_key(o)).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);

        for (index, option) in record.options.iter().enumerate() {
            assert!(option.starts_with(&format!("{}. ", choice_letter(index))));
        }
    }

    #[test]
    fn label_only_options_are_dropped() {
        let record = reshape_multiple_choice(&mc("Q", &["A.", "B. Rome", "  c)  ", "D. Oslo"], "Oslo"));

        assert_eq!(record.options, vec!["A. Rome", "B. Oslo"]);
        assert_eq!(record.answer_text, "B. Oslo");
    }

    #[test]
    fn dedup_and_relabel_hold_for_generated_option_lists() {
        let words = ["Paris", "Rome", "Oslo", "Lima"];
        let dressings: [fn(&str) -> String; 3] = [
            |w: &str| w.to_string(),
            |w: &str| format!("a. {}", w.to_uppercase()),
            |w: &str| format!("  D) {}  ", w.to_lowercase()),
        ];

        for duplicate in 0..words.len() {
            for position in 0..=words.len() {
                for dress in dressings {
                    let mut raw: Vec<String> = words
                        .iter()
                        .enumerate()
                        .map(|(i, w)| format!("{}. {}", choice_letter(i), w))
                        .collect();
                    raw.insert(position, dress(words[duplicate]));
                    raw.insert(position % 2, "B)".to_string());

                    let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
                    let record = reshape_multiple_choice(&mc("Q", &refs, words[duplicate]));

                    let keys: Vec<String> = record.options.iter().map(|o| option_key(o)).collect();
                    let unique: HashSet<&String> = keys.iter().collect();
                    assert_eq!(unique.len(), keys.len(), "{:?}", raw);
                    assert_eq!(keys.len(), words.len(), "{:?}", raw);

                    for (index, option) in record.options.iter().enumerate() {
                        assert!(
                            option.starts_with(&format!("{}. ", choice_letter(index))),
                            "{:?}",
                            record.options
                        );
                    }
                    assert!(record.options.contains(&record.answer_text));
                }
            }
        }
    }

    #[test]
    fn unmatched_answer_keeps_the_provider_text() {
        let record = reshape_multiple_choice(&mc("Q", &["A. Paris", "B. Rome"], "  Madrid "));
        assert_eq!(record.answer_text, "Madrid");
    }

    #[test]
    fn question_text_is_trimmed() {
        let record = reshape_multiple_choice(&mc("  Why?\n", &["A. Because"], "A. Because"));
        assert_eq!(record.prompt, "Why?");
    }

    #[test]
    fn true_false_answers_are_normalized() {
        assert_eq!(reshape_true_false(&tf("TRUE")).answer_text, "True");
        assert_eq!(reshape_true_false(&tf(" true ")).answer_text, "True");
        assert_eq!(reshape_true_false(&tf("no")).answer_text, "False");
        assert_eq!(reshape_true_false(&tf("")).answer_text, "False");

        let record = reshape_true_false(&tf("false"));
        assert_eq!(record.options, vec!["True", "False"]);
        assert_eq!(record.prompt, "Plants need light.");
    }

    #[test]
    fn raw_question_accepts_non_string_answers() {
        let raw: RawQuestion =
            serde_json::from_str(r#"{"question":"Is ice cold?","answer":true}"#).unwrap();
        assert_eq!(raw.answer, "true");
        assert_eq!(reshape(&raw, QuestionType::TrueFalse).answer_text, "True");

        let raw: RawQuestion = serde_json::from_str(r#"{"question":"Q"}"#).unwrap();
        assert!(raw.options.is_empty());
        assert_eq!(raw.answer, "");
    }

    #[test]
    fn choice_letters_continue_past_z() {
        assert_eq!(choice_letter(0), "A");
        assert_eq!(choice_letter(3), "D");
        assert_eq!(choice_letter(25), "Z");
        assert_eq!(choice_letter(26), "AA");
    }
}
