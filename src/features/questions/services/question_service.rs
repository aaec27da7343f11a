use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::category_map;
use crate::features::questions::dtos::{
    CreateQuestionDto, CreatedQuestionDto, DeletedQuestionDto, QuestionPageDto, SearchResultDto,
};
use crate::features::questions::models::NewQuestion;
use crate::modules::store::TriviaStore;
use crate::shared::types::PaginationQuery;

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of questions plus the total count and the category map
    pub async fn list_page(&self, query: &PaginationQuery) -> Result<QuestionPageDto> {
        let questions = match query.offset() {
            Some(offset) => self
                .store
                .list_questions(offset, query.limit())
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list questions: {:?}", e);
                    AppError::Database(e)
                })?,
            None => Vec::new(),
        };

        let total_questions = self.store.count_questions().await.map_err(|e| {
            tracing::error!("Failed to count questions: {:?}", e);
            AppError::Database(e)
        })?;

        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(QuestionPageDto {
            questions: questions.into_iter().map(Into::into).collect(),
            total_questions,
            categories: category_map(categories),
            current_category: None,
        })
    }

    /// Insert a validated question after checking its category exists
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<CreatedQuestionDto> {
        let exists = self
            .store
            .category_exists(dto.category)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up category: {:?}", e);
                AppError::Database(e)
            })?;

        if !exists {
            return Err(AppError::Unprocessable(format!(
                "Category {} does not exist",
                dto.category
            )));
        }

        let new_question = NewQuestion::from(dto);
        let question = self
            .store
            .insert_question(&new_question)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(CreatedQuestionDto {
            created: question.id,
            question: question.into(),
        })
    }

    /// Delete a question by id.
    ///
    /// A missing question is reported as unprocessable (422), which is what
    /// the trivia frontend has always received for this case.
    pub async fn delete(&self, question_id: i32) -> Result<DeletedQuestionDto> {
        let question = self.store.get_question(question_id).await.map_err(|e| {
            tracing::error!("Failed to get question: {:?}", e);
            AppError::Database(e)
        })?;

        if question.is_none() {
            return Err(AppError::Unprocessable(format!(
                "Question {} not found",
                question_id
            )));
        }

        let deleted = self
            .store
            .delete_question(question_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question: {:?}", e);
                AppError::Database(e)
            })?;

        // Removed by a concurrent request between lookup and delete
        if !deleted {
            return Err(AppError::Unprocessable(format!(
                "Question {} was already deleted",
                question_id
            )));
        }

        tracing::info!("Question deleted: id={}", question_id);

        Ok(DeletedQuestionDto {
            deleted: question_id,
        })
    }

    /// Case-insensitive substring search over question text
    pub async fn search(&self, term: &str) -> Result<SearchResultDto> {
        let questions = self.store.search_questions(term).await.map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(SearchResultDto {
            total_questions: questions.len(),
            questions: questions.into_iter().map(Into::into).collect(),
        })
    }
}
