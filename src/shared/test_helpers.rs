use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::features::api_router;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{StoreResult, TriviaStore};

/// In-memory [`TriviaStore`] mirroring the SQL semantics of `PgTriviaStore`
#[derive(Default)]
pub struct MemoryTriviaStore {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
}

impl MemoryTriviaStore {
    /// The six categories seeded by the initial migration
    pub fn with_default_categories() -> Self {
        let categories = [
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports",
        ]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Category {
            id: i as i32 + 1,
            kind: kind.to_string(),
        })
        .collect();

        Self {
            categories,
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Add a question, returning its id
    pub fn seed(&self, question: &str, answer: &str, category: i32, difficulty: i32) -> i32 {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        questions.push(Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        });
        id
    }

    /// Add `count` generated questions to `category`
    pub fn seed_generated(&self, count: usize, category: i32) -> Vec<i32> {
        (0..count)
            .map(|_| {
                let question: String = Sentence(3..8).fake();
                let answer: String = Sentence(1..3).fake();
                self.seed(&question, &answer, category, 3)
            })
            .collect()
    }

    pub fn question_ids(&self) -> Vec<i32> {
        self.questions.lock().unwrap().iter().map(|q| q.id).collect()
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        let mut matches: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect();
        matches.sort_by_key(|q| q.id);
        matches
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn category_exists(&self, id: i32) -> StoreResult<bool> {
        Ok(self.categories.iter().any(|c| c.id == id))
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(self.questions.lock().unwrap().len() as i64)
    }

    async fn list_questions(&self, offset: i64, limit: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .filtered(|_| true)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>> {
        Ok(self.filtered(|q| q.id == id).into_iter().next())
    }

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let id = self.seed(&new.question, &new.answer, new.category, new.difficulty);
        Ok(Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self.filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn questions_by_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        Ok(self.filtered(|q| q.category == category))
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        Ok(self.filtered(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        }))
    }
}

/// Store whose every call fails, for exercising the 500 path
pub struct FailingTriviaStore;

#[async_trait]
impl TriviaStore for FailingTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn category_exists(&self, _id: i32) -> StoreResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_questions(&self, _offset: i64, _limit: i64) -> StoreResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn get_question(&self, _id: i32) -> StoreResult<Option<Question>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert_question(&self, _new: &NewQuestion) -> StoreResult<Question> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_question(&self, _id: i32) -> StoreResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn search_questions(&self, _term: &str) -> StoreResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn questions_by_category(&self, _category: i32) -> StoreResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn quiz_candidates(
        &self,
        _category: Option<i32>,
        _exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Store with the default categories and a few well-known questions
pub fn sample_store() -> Arc<MemoryTriviaStore> {
    let store = MemoryTriviaStore::with_default_categories();
    store.seed("What is the heaviest organ in the human body?", "The Liver", 1, 4);
    store.seed("Who discovered penicillin?", "Alexander Fleming", 1, 3);
    store.seed(
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    );
    store.seed("La Giaconda is better known as what?", "Mona Lisa", 2, 3);
    Arc::new(store)
}

/// Test server over the full API router
pub fn test_server(store: Arc<dyn TriviaStore>) -> TestServer {
    TestServer::new(api_router(store)).unwrap()
}
