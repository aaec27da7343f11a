//! Trivia categories.
//!
//! Categories are seeded by the initial migration and read-only through the
//! API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Map of category id to label |
//! | GET | `/categories/{category_id}/questions` | Questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
