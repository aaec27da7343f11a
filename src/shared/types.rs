use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{ALL_CATEGORIES, QUESTIONS_PER_PAGE};

/// Success envelope: `{"success": true, ...fields of T}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope: `{"success": false, "error": 404, "message": "resource not found"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: &str) -> Self {
        Self {
            success: false,
            error,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query for `GET /questions` (1-indexed, default 1).
///
/// The raw value is kept as a string so a malformed page falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,
}

impl PaginationQuery {
    /// Build from raw query pairs, keeping the first `page` when it repeats
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }

    /// SQL OFFSET for the requested page, or `None` when the page is below 1
    /// and can only be empty.
    pub fn offset(&self) -> Option<i64> {
        let page = self.page();
        if page < 1 {
            return None;
        }
        page.checked_sub(1)?.checked_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }
}

// =============================================================================
// IDS
// =============================================================================

/// Deserialize an integer id sent either as a JSON number or a numeric string
/// (`1` and `"1"` are both accepted).
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Text(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => narrow_id(n),
        IntOrString::Text(s) => parse_id(&s),
    }
}

/// Deserialize a quiz category id. On top of what `int_or_string` accepts,
/// `null`, `""` and `false` select every category.
pub fn category_id_or_all<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CategoryId {
        Int(i64),
        Flag(bool),
        Text(String),
    }

    match Option::<CategoryId>::deserialize(deserializer)? {
        None | Some(CategoryId::Flag(false)) => Ok(ALL_CATEGORIES),
        Some(CategoryId::Text(s)) if s.is_empty() => Ok(ALL_CATEGORIES),
        Some(CategoryId::Text(s)) => parse_id(&s),
        Some(CategoryId::Int(n)) => narrow_id(n),
        Some(CategoryId::Flag(true)) => Err(serde::de::Error::custom("invalid id: true")),
    }
}

/// Deserialize free text that may also arrive as a JSON number (`3` reads as
/// `"3"`). Zero reads as an empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn parse_id<E: serde::de::Error>(s: &str) -> Result<i32, E> {
    let value = s
        .trim()
        .parse::<i64>()
        .map_err(|_| E::custom(format!("invalid id: {:?}", s)))?;
    narrow_id(value)
}

fn narrow_id<E: serde::de::Error>(value: i64) -> Result<i32, E> {
    i32::try_from(value).map_err(|_| E::custom(format!("id out of range: {}", value)))
}
