// HTTP mapping shared by every cylinder test route.
//
// Responsibilities
// - Turn ApplicationError into a status code and a {"msg": ...} body.
// - Log store failures; callers only see a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::cylinder_tests::application::errors::ApplicationError;

const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

pub fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ErrorBody { msg: msg.into() })).into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(msg) | ApplicationError::InvalidQueryParameters(msg) => {
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            ApplicationError::Store(error) => {
                tracing::error!(error = %error, "record store failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        }
    }
}
