use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::shared::constants::ALL_CATEGORIES;
use crate::shared::types::category_id_or_all;

/// Category picked on the quiz screen; id 0 (or null, `""`, `false`) means "All"
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "category_id_or_all")]
    #[schema(value_type = Option<i32>)]
    pub id: i32,

    /// Display label, informational only
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategoryDto {
    /// Category filter for the candidate query, `None` for every category
    pub fn filter(&self) -> Option<i32> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

/// Request DTO for `POST /quizzes`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    pub quiz_category: Option<QuizCategoryDto>,
    pub previous_questions: Vec<i32>,
}

/// Response DTO for `POST /quizzes`: the next question, or the end marker
/// once every candidate has been asked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuizResponseDto {
    Next { question: QuestionResponseDto },
    Finished { finish_quiz: bool },
}
