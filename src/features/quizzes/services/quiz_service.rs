use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::{QuizCategoryDto, QuizResponseDto};
use crate::modules::store::TriviaStore;

/// Service serving the quiz flow one question at a time
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Draw a random question from `category` that is not in `previous`
    pub async fn next_question(
        &self,
        category: &QuizCategoryDto,
        previous: &[i32],
    ) -> Result<QuizResponseDto> {
        let candidates = self
            .store
            .quiz_candidates(category.filter(), previous)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load quiz candidates: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::debug!(
            "Quiz draw: category={} ({}), asked={}, remaining={}",
            category.id,
            category.kind.as_deref().unwrap_or("-"),
            previous.len(),
            candidates.len()
        );

        let response = match pick(&candidates, &mut rand::thread_rng()) {
            Some(question) => QuizResponseDto::Next {
                question: question.into(),
            },
            None => QuizResponseDto::Finished { finish_quiz: true },
        };

        Ok(response)
    }
}

/// Uniform draw over the candidate set
fn pick<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn test_pick_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_reaches_every_candidate() {
        let candidates: Vec<Question> = (1..=4).map(question).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<i32> = (0..200)
            .filter_map(|_| pick(&candidates, &mut rng))
            .map(|q| q.id)
            .collect();

        assert_eq!(seen, HashSet::from([1, 2, 3, 4]));
    }
}
