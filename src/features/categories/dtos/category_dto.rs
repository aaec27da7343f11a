use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::questions::dtos::QuestionResponseDto;

/// Category id → display label, e.g. `{"1": "Science"}`
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id → label map over every category
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Response DTO for `GET /categories/{category_id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: i32,
}
