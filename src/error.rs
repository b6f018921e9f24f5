//! Error types for clock-service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Clock unavailable: {0}")]
    ClockUnavailable(String),
}

impl Error {
    pub fn clock_unavailable(msg: impl Into<String>) -> Self {
        Error::ClockUnavailable(msg.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
