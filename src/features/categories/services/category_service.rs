use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryListDto, CategoryQuestionsDto};
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Map of every category id to its label
    pub async fn list(&self) -> Result<CategoryListDto> {
        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(CategoryListDto {
            categories: category_map(categories),
        })
    }

    /// All questions filed under a category; an empty category is a 404
    pub async fn questions(&self, category_id: i32) -> Result<CategoryQuestionsDto> {
        let questions = self
            .store
            .questions_by_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions by category: {:?}", e);
                AppError::Database(e)
            })?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions in category {}",
                category_id
            )));
        }

        Ok(CategoryQuestionsDto {
            total_questions: questions.len(),
            questions: questions.into_iter().map(Into::into).collect(),
            current_category: category_id,
        })
    }
}
