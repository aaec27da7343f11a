/// Number of questions per page on `GET /questions`
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Quiz category id meaning "every category"
pub const ALL_CATEGORIES: i32 = 0;
