use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::types::{int_or_string, string_or_number};
use crate::shared::validation::validate_not_blank;

/// Formatted question: the flat record every endpoint returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question
///
/// `category` and `difficulty` accept a number or a numeric string.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub question: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub answer: String,

    #[serde(deserialize_with = "int_or_string")]
    #[schema(value_type = i32, minimum = 1, maximum = 5)]
    #[validate(range(min = 1, max = 5, message = "Difficulty must be between 1 and 5"))]
    pub difficulty: i32,

    #[serde(deserialize_with = "int_or_string")]
    #[schema(value_type = i32, minimum = 1)]
    #[validate(range(min = 1, message = "Category must be a positive id"))]
    pub category: i32,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Request DTO for searching questions
///
/// A numeric term is searched by its decimal text.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm", deserialize_with = "string_or_number")]
    #[validate(length(min = 1, message = "Search term is required"))]
    pub search_term: String,
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null on this endpoint
    pub current_category: Option<i32>,
}

/// Response DTO for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionDto {
    pub created: i32,
    pub question: QuestionResponseDto,
}

/// Response DTO for `DELETE /questions/{question_id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedQuestionDto {
    pub deleted: i32,
}

/// Response DTO for `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<CreateQuestionDto, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_create_question_accepts_numeric_strings() {
        let dto = parse(json!({
            "question": "How far away is the sun?",
            "answer": "93 million miles away",
            "difficulty": "2",
            "category": "1"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.difficulty, 2);
        assert_eq!(dto.category, 1);
    }

    #[test]
    fn test_create_question_rejects_zero_and_out_of_range_values() {
        for (difficulty, category) in [(0, 1), (6, 1), (3, 0), (3, -2)] {
            let dto = parse(json!({
                "question": "q",
                "answer": "a",
                "difficulty": difficulty,
                "category": category
            }))
            .unwrap();
            assert!(
                dto.validate().is_err(),
                "difficulty={} category={} should be invalid",
                difficulty,
                category
            );
        }
    }

    #[test]
    fn test_create_question_rejects_blank_text() {
        let dto = parse(json!({
            "question": "   ",
            "answer": "a",
            "difficulty": 1,
            "category": 1
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("question"));
    }

    #[test]
    fn test_create_question_requires_every_field() {
        assert!(parse(json!({})).is_err());
        assert!(parse(json!({ "question": "q", "answer": "a", "difficulty": 1 })).is_err());
    }

    #[test]
    fn test_search_term_field_name() {
        let dto: SearchQuestionsDto =
            serde_json::from_value(json!({ "searchTerm": "actor" })).unwrap();
        assert_eq!(dto.search_term, "actor");
        assert!(dto.validate().is_ok());

        let empty: SearchQuestionsDto =
            serde_json::from_value(json!({ "searchTerm": "" })).unwrap();
        assert!(empty.validate().is_err());

        let numeric: SearchQuestionsDto =
            serde_json::from_value(json!({ "searchTerm": 1990 })).unwrap();
        assert_eq!(numeric.search_term, "1990");
    }

    #[test]
    fn test_page_serializes_null_current_category() {
        let page = QuestionPageDto {
            questions: vec![],
            total_questions: 0,
            categories: CategoryMap::new(),
            current_category: None,
        };
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value["current_category"], json!(null));
    }
}
