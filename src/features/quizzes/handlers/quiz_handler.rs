use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Get the next quiz question
///
/// Returns a random question of the chosen category (id 0 for all
/// categories) that is not listed in `previous_questions`, or
/// `finish_quiz: true` when none is left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question or end of quiz", body = ApiResponse<QuizResponseDto>),
        (status = 400, description = "Missing quiz category or previous questions", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    payload: std::result::Result<AppJson<QuizRequestDto>, AppJsonRejection>,
) -> Result<Json<ApiResponse<QuizResponseDto>>> {
    let AppJson(dto) = payload.map_err(|e| e.into_error(AppError::BadRequest))?;
    let category = dto
        .quiz_category
        .ok_or_else(|| AppError::BadRequest("quiz_category is required".to_string()))?;

    let next = service
        .next_question(&category, &dto.previous_questions)
        .await?;
    Ok(Json(ApiResponse::success(next)))
}
