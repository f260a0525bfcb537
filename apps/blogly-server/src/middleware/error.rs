//! Error handling - problem details rendered as a small HTML page.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use blogly_core::{DomainError, RepoError};
use blogly_shared::{ErrorResponse, FormError};
use std::fmt;

/// Application-level error type returned by every handler.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let problem = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(problem_page(&problem))
    }
}

/// Standalone page so errors still render when templates are broken.
fn problem_page(problem: &ErrorResponse) -> String {
    let detail = problem
        .detail
        .as_deref()
        .map(|d| format!("<p class=\"detail\">{}</p>", tera::escape_html(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{status} {title}</title></head>\n<body>\n\
         <h1>{status} {title}</h1>\n{detail}\n<a href=\"/\">Back to home</a>\n</body>\n</html>\n",
        status = problem.status,
        title = tera::escape_html(&problem.title),
        detail = detail,
    )
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepoError::Constraint(msg) => {
                tracing::error!("Constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::ReferentialIntegrity(msg) => {
                tracing::error!("Referential integrity violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(format!("Template error: {:?}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_not_found_renders_escaped_page() {
        let err = AppError::from(RepoError::NotFound {
            entity_type: "Post",
            id: 9,
        });
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<h1>404 Not Found</h1>"));
        assert!(html.contains("Post with id 9 not found"));
    }

    #[test]
    fn test_storage_violations_are_server_errors() {
        let err = AppError::from(RepoError::Constraint("duplicate key".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(DomainError::MissingField("title"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
