//! Trivia persistence
//!
//! The [`TriviaStore`] trait is the seam between feature services and the
//! database; [`PgTriviaStore`] implements it on top of a sqlx `PgPool`.

mod postgres;
mod trivia_store;

pub use postgres::PgTriviaStore;
pub use trivia_store::{StoreResult, TriviaStore};
