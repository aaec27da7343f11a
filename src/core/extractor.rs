use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

/// JSON body rejection.
///
/// Routes disagree on which status an unreadable body maps to, so handlers
/// take `Result<AppJson<T>, AppJsonRejection>` and pick the error kind with
/// [`AppJsonRejection::into_error`]. Used directly as a rejection it answers
/// 400.
#[derive(Debug)]
pub struct AppJsonRejection(JsonRejection);

impl AppJsonRejection {
    pub fn detail(&self) -> String {
        match &self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        }
    }

    pub fn into_error(self, kind: fn(String) -> AppError) -> AppError {
        kind(self.detail())
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        self.into_error(AppError::BadRequest).into_response()
    }
}
