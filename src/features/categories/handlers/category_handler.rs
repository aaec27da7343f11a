use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryListDto, CategoryQuestionsDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories as an id → label map
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Map of category id to label", body = ApiResponse<CategoryListDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// List every question in a category
///
/// A category without questions (or an unknown id) is reported as 404.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = ApiResponse<CategoryQuestionsDto>),
        (status = 404, description = "No questions for this category", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    category_id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let Path(category_id) = category_id.map_err(|e| AppError::NotFound(e.body_text()))?;

    let questions = service.questions(category_id).await?;
    Ok(Json(ApiResponse::success(questions)))
}
