use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use strum::Display;

/// Required note fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoteField {
    Title,
    Body,
    Tags,
}

/// Errors returned by `NotebookStore` operations.
///
/// The `Display` text is sent to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Notebook \"{0}\" does not exist")]
    NotebookNotFound(String),
    #[error("Note with id \"{0}\" does not exist")]
    NoteNotFound(String),
    #[error("Need {0} to create note")]
    MissingField(NoteField),
}

/// Status for a plain-text error message: 401 when the message mentions
/// "unauthorized", 500 for everything else.
pub fn status_for_message(message: &str) -> StatusCode {
    if message.contains("unauthorized") {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        status_for_message(&self.to_string())
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        log::warn!("[NOTEBOOKS] Request failed: {}", message);
        HttpResponse::build(status_for_message(&message))
            .content_type("text/plain; charset=utf-8")
            .body(message)
    }
}
