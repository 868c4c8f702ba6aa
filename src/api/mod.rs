//! API handlers for Bookmart REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::any::Any;

use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// JSON body extractor whose rejections use the application error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// A known path hit with an unsupported method is answered like an unknown route
pub async fn method_mismatch_as_not_found(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::NotFound("Not Found".to_string()).into_response();
    }
    response
}

/// Turn a panic inside a handler into a 500 envelope
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(detail).into_response()
}
