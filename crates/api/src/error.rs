use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use lore_core::error::CoreError;
use sqlx::error::ErrorKind;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a consistent HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// No route or record matches the requested path.
    #[error("Page not found")]
    PageNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Render(err) => {
                tracing::error!(error = %err, "Template render error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::PageNotFound => (
                StatusCode::NOT_FOUND,
                "The requested page does not exist".to_string(),
            ),
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - Constraint violations (a required form field was missing or blank) map to 500,
///   logged at `warn` since they are caused by the submitted data.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err) => {
            match db_err.kind() {
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    tracing::warn!(error = %db_err, "Insert rejected by constraint");
                }
                _ => tracing::error!(error = %db_err, "Database error"),
            }
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Standalone HTML page for error responses.
///
/// Kept independent of the template registry so a broken template can still
/// be reported.
fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    let message = handlebars::html_escape(message);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
         <body>\n\
         <h1>{code} {reason}</h1>\n\
         <p>{message}</p>\n\
         <p><a href=\"/\">Back to the wiki</a></p>\n\
         </body>\n\
         </html>\n"
    )
}
