use axum::{ http::StatusCode, response::{ Html, IntoResponse, Response } };
use std::fmt;
use tracing::error;

use crate::database::StoreError;

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    DatabaseError,
    TemplateError,
    NotFound,
    PostNotFound,
    TitleRequired,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl ErrorMessage {
    fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::DatabaseError => "Error talking to the database",
            ErrorMessage::TemplateError => "Unable to render the page",
            ErrorMessage::NotFound => "The requested page could not be found",
            ErrorMessage::PostNotFound => "Post not found!",
            ErrorMessage::TitleRequired => "Title is required!",
        }
    }
}

/// An unrecovered request failure, rendered as a bare HTML error page.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_http_response(self) -> Response {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n<body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<a href=\"/\">Back to posts</a>\n</body>\n</html>\n",
            code = self.status.as_u16(),
            reason = reason,
            message = handlebars::html_escape(&self.message)
        );

        (self.status, Html(body)).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

// storage details go to the log, not to the browser
impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "storage failure");
        HttpError::server_error(ErrorMessage::DatabaseError.to_string())
    }
}

impl From<handlebars::RenderError> for HttpError {
    fn from(err: handlebars::RenderError) -> Self {
        error!(error = %err, "template render failure");
        HttpError::server_error(ErrorMessage::TemplateError.to_string())
    }
}
