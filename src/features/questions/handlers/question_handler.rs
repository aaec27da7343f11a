use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreatedQuestionDto, DeletedQuestionDto, QuestionPageDto,
    SearchQuestionsDto, SearchResultDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, ErrorResponse, PaginationQuery};

/// List questions, ten per page
///
/// A repeated `page` keeps its first value; a malformed query string reads as
/// page 1.
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of questions", body = ApiResponse<QuestionPageDto>),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let query = query
        .map(|Query(pairs)| PaginationQuery::from_pairs(pairs))
        .unwrap_or_default();

    let page = service.list_page(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = ApiResponse<CreatedQuestionDto>),
        (status = 422, description = "Missing or invalid field, or unknown category", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    payload: std::result::Result<AppJson<CreateQuestionDto>, AppJsonRejection>,
) -> Result<Json<ApiResponse<CreatedQuestionDto>>> {
    let AppJson(dto) = payload.map_err(|e| e.into_error(AppError::Unprocessable))?;
    dto.validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let created = service.create(dto).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<DeletedQuestionDto>),
        (status = 422, description = "Question does not exist", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    question_id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<DeletedQuestionDto>>> {
    let Path(question_id) = question_id.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let deleted = service.delete(question_id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}

/// Search questions by a case-insensitive substring
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = ApiResponse<SearchResultDto>),
        (status = 404, description = "Missing or empty search term", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    payload: std::result::Result<AppJson<SearchQuestionsDto>, AppJsonRejection>,
) -> Result<Json<ApiResponse<SearchResultDto>>> {
    let AppJson(dto) = payload.map_err(|e| e.into_error(AppError::NotFound))?;
    dto.validate()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    let results = service.search(&dto.search_term).await?;
    Ok(Json(ApiResponse::success(results)))
}
