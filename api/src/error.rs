//! Error

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

/// Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// InvalidRequest
    #[error("error: {0}")]
    InvalidRequest(String, Option<String>),
    /// Internal server or service error
    #[error("error: {0}")]
    Internal(String, Option<String>),
}

impl Error {
    /// Returns the main message
    pub fn message(&self) -> String {
        match self {
            Error::InvalidRequest(msg, _) => msg.clone(),
            Error::Internal(msg, _) => msg.clone(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> String {
        match self {
            Error::InvalidRequest(_, _) => "INVALID_REQUEST".to_string(),
            Error::Internal(_, _) => "INTERNAL".to_string(),
        }
    }

    /// Returns the HTTP code
    pub fn http_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_, _) => StatusCode::BAD_REQUEST,
            Error::Internal(_, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<salvo::http::ParseError> for Error {
    fn from(value: salvo::http::ParseError) -> Self {
        Error::InvalidRequest(value.to_string(), None)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Internal(value.to_string(), None)
    }
}

/// Http error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HttpErrorResponse {
    /// Main error
    pub error: HttpError,
}

/// Error JSON shape
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HttpError {
    /// Code (string)
    pub code: String,
    /// Message
    pub message: String,
    /// Other details
    pub detail: Option<String>,
}

#[async_trait]
impl Writer for Error {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let code = self.code();
        let http_code = self.http_code();
        let (message, detail) = match self {
            Error::InvalidRequest(message, detail) => (message, detail),
            Error::Internal(message, detail) => (message, detail),
        };

        let err = HttpErrorResponse {
            error: HttpError {
                code,
                message,
                detail,
            },
        };
        res.status_code(http_code);
        res.render(Json(err));
    }
}
