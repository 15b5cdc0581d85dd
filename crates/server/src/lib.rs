use api_types::ErrorBody;
use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod edit;
mod history;
mod server;

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::EntryNotFound => StatusCode::NOT_FOUND,
        EngineError::Io(_) | EngineError::Json(_) | EngineError::UnsupportedDateFormat(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        EngineError::InvalidInput
        | EngineError::UserNotFound
        | EngineError::InvalidAmount
        | EngineError::InvalidCategory
        | EngineError::InvalidDate => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    if err.is_storage() {
        tracing::error!("storage error: {err}");
        return "internal server error".to_string();
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                message_for_engine_error(err),
            ),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {value}");
        Self::Generic(EngineError::InvalidInput.to_string())
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
