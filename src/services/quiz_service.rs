use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuestionRecord, QuestionType},
        dto::request::{GenerateCustomQuizRequest, GenerateQuizRequest},
    },
    quiz::{question_prompt, reshape, shuffle_selection, unwrap_questions, PromptSpec},
    services::completion_provider::{CompletionProvider, CompletionRequest},
};

/// One provider call: `count` questions of one type, optionally pinned to a
/// cognitive level and a content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationCategory {
    pub question_type: QuestionType,
    pub count: u32,
    pub cognitive_level: Option<String>,
    pub topic_area: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPlan {
    pub topic: String,
    pub difficulty: String,
    pub categories: Vec<GenerationCategory>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_empty(categories: Vec<GenerationCategory>) -> AppResult<Vec<GenerationCategory>> {
    if categories.is_empty() {
        return Err(AppError::ValidationError(
            "At least one question must be requested".to_string(),
        ));
    }
    Ok(categories)
}

fn requested_types(codes: &[String]) -> AppResult<Vec<QuestionType>> {
    if codes.is_empty() {
        return Ok(vec![QuestionType::MultipleChoice, QuestionType::TrueFalse]);
    }

    let mut types = Vec::with_capacity(2);
    for code in codes {
        let question_type = QuestionType::from_code(code)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown quiz type: {}", code)))?;
        if !types.contains(&question_type) {
            types.push(question_type);
        }
    }
    Ok(types)
}

impl QuizPlan {
    /// Plans one category per (type, level, area) with a positive count.
    pub fn from_request(request: &GenerateQuizRequest, topic: String) -> AppResult<Self> {
        let categories = Self::categories_for(request)?;
        Self::for_topic(topic, request.difficulty.trim().to_string(), categories)
    }

    /// Checks the requested types and counts without needing the topic, so a
    /// request can be rejected before any upload is sent to a provider.
    pub fn categories_for(request: &GenerateQuizRequest) -> AppResult<Vec<GenerationCategory>> {
        let types = requested_types(&request.quiz_type)?;
        let default_level = non_blank(request.cognitive_level.as_deref());

        let mut categories = Vec::new();
        let mut push = |question_type: QuestionType,
                        count: u32,
                        cognitive_level: Option<String>,
                        topic_area: Option<String>| {
            if count > 0 && types.contains(&question_type) {
                categories.push(GenerationCategory {
                    question_type,
                    count,
                    cognitive_level,
                    topic_area,
                });
            }
        };

        if request.breakdown.is_empty() {
            push(
                QuestionType::MultipleChoice,
                request.mc_questions,
                default_level.clone(),
                None,
            );
            push(
                QuestionType::TrueFalse,
                request.tf_questions,
                default_level.clone(),
                None,
            );
        } else {
            for allocation in &request.breakdown {
                let level =
                    non_blank(allocation.cognitive_level.as_deref()).or_else(|| default_level.clone());
                let area = non_blank(allocation.topic_area.as_deref());
                push(
                    QuestionType::MultipleChoice,
                    allocation.mc_questions,
                    level.clone(),
                    area.clone(),
                );
                push(QuestionType::TrueFalse, allocation.tf_questions, level, area);
            }
        }

        non_empty(categories)
    }

    pub fn for_topic(
        topic: String,
        difficulty: String,
        categories: Vec<GenerationCategory>,
    ) -> AppResult<Self> {
        if topic.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Quiz text or file is required".to_string(),
            ));
        }
        Ok(Self {
            topic,
            difficulty,
            categories: non_empty(categories)?,
        })
    }

    pub fn from_custom(request: &GenerateCustomQuizRequest) -> AppResult<Self> {
        let title = request.title.trim();
        let difficulty = request.difficulty.trim();
        if title.is_empty() || difficulty.is_empty() {
            return Err(AppError::ValidationError(
                "Missing quiz title or difficulty.".to_string(),
            ));
        }

        let categories = [
            (QuestionType::MultipleChoice, request.mcq_count),
            (QuestionType::TrueFalse, request.tf_count),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(question_type, count)| GenerationCategory {
            question_type,
            count,
            cognitive_level: None,
            topic_area: None,
        })
        .collect();

        Ok(Self {
            topic: title.to_string(),
            difficulty: difficulty.to_string(),
            categories: non_empty(categories)?,
        })
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.count as usize).sum()
    }
}

pub struct QuizService {
    completion: Arc<dyn CompletionProvider>,
    model: String,
}

impl QuizService {
    pub fn new(completion: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
        }
    }

    /// Generates every category concurrently; one failed category fails the quiz.
    pub async fn generate(&self, plan: &QuizPlan) -> AppResult<Vec<QuestionRecord>> {
        log::info!(
            "Generating {} questions in {} categories for topic of {} chars",
            plan.total(),
            plan.categories.len(),
            plan.topic.len()
        );

        let batches = try_join_all(
            plan.categories
                .iter()
                .map(|category| self.generate_category(plan, category)),
        )
        .await?;

        let records: Vec<QuestionRecord> = batches.into_iter().flatten().collect();
        Ok(shuffle_selection(records, plan.total()))
    }

    async fn generate_category(
        &self,
        plan: &QuizPlan,
        category: &GenerationCategory,
    ) -> AppResult<Vec<QuestionRecord>> {
        let spec = PromptSpec {
            topic: &plan.topic,
            difficulty: &plan.difficulty,
            count: category.count,
            cognitive_level: category.cognitive_level.as_deref(),
            topic_area: category.topic_area.as_deref(),
        };
        let prompt = question_prompt(category.question_type, &spec);

        let reply = self
            .completion
            .complete(CompletionRequest::new(self.model.clone(), prompt))
            .await?;
        let raw_questions = unwrap_questions(&reply)?;

        let records = raw_questions
            .iter()
            .map(|raw| {
                reshape(raw, category.question_type).with_labels(
                    category.cognitive_level.as_deref(),
                    category.topic_area.as_deref(),
                )
            })
            .filter(|record| !record.prompt.is_empty())
            .take(category.count as usize)
            .collect::<Vec<_>>();

        log::debug!(
            "Category {} produced {}/{} questions",
            category.question_type.as_code(),
            records.len(),
            category.count
        );
        Ok(records)
    }
}
