//! Trivia questions: paginated listing, creation, deletion and search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten questions per page with totals and categories |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{question_id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive substring search |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
