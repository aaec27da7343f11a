pub mod categories;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::Router;

use crate::core::middleware;
use crate::modules::store::TriviaStore;

/// Every trivia route on top of one store, with the JSON 404/405 fallbacks
pub fn api_router(store: Arc<dyn TriviaStore>) -> Router {
    let category_service = Arc::new(categories::CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(questions::QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(quizzes::QuizService::new(store));

    Router::new()
        .merge(categories::routes::routes(category_service))
        .merge(questions::routes::routes(question_service))
        .merge(quizzes::routes::routes(quiz_service))
        .fallback(middleware::not_found_fallback)
        .method_not_allowed_fallback(middleware::method_not_allowed_fallback)
}
