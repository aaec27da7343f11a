//! Storage contract for trivia data
//!
//! Services only talk to `dyn TriviaStore`; production wires in
//! [`PgTriviaStore`](super::PgTriviaStore).

use async_trait::async_trait;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Every category, ordered by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn category_exists(&self, id: i32) -> StoreResult<bool>;

    async fn count_questions(&self) -> StoreResult<i64>;

    /// Window of questions ordered by id
    async fn list_questions(&self, offset: i64, limit: i64) -> StoreResult<Vec<Question>>;

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>>;

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question>;

    /// Returns false when no row had that id
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;

    /// Case-insensitive literal substring match on the question text
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn questions_by_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Questions of `category` (or of every category when `None`) whose id
    /// is not in `exclude`
    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>>;
}

/// Escape LIKE wildcards so the term matches literally (escape char `\`)
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_text_unchanged() {
        assert_eq!(escape_like("actor"), "actor");
        assert_eq!(escape_like("Who's there?"), "Who's there?");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}
