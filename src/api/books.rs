//! Book listing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::book::{Book, CreateBook, UpdateBook},
    AppState,
};

use super::ApiJson;

/// Response carrying a status message and the affected book
#[derive(Debug, Serialize, ToSchema)]
pub struct BookEnvelope {
    pub message: String,
    pub book: Book,
}

/// Status message, with the underlying error text on storage failures
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

/// Failure of a book operation, rendered with the operation's own message
#[derive(Debug)]
pub struct BookError {
    message: &'static str,
    source: AppError,
}

impl BookError {
    fn during(message: &'static str) -> impl FnOnce(AppError) -> Self {
        move |source| Self { message, source }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        match self.source {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Book not found")),
            )
                .into_response(),
            source => {
                tracing::error!(error = %source, "{}", self.message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse {
                        message: self.message.to_string(),
                        error: Some(source.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}

type BookResult<T> = Result<T, BookError>;

/// Create a book listing
#[utoipa::path(
    post,
    path = "/books/create",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookEnvelope),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> BookResult<(StatusCode, Json<BookEnvelope>)> {
    let book = state
        .services
        .books
        .create(data)
        .await
        .map_err(BookError::during("Error creating book"))?;

    Ok((
        StatusCode::CREATED,
        Json(BookEnvelope {
            message: "Book created successfully".to_string(),
            book,
        }),
    ))
}

/// List every book listing
#[utoipa::path(
    get,
    path = "/books/get",
    tag = "books",
    responses(
        (status = 200, description = "All book listings", body = Vec<Book>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> BookResult<Json<Vec<Book>>> {
    let books = state
        .services
        .books
        .list()
        .await
        .map_err(BookError::during("Error fetching books"))?;
    Ok(Json(books))
}

/// Replace the mutable fields of a book listing
#[utoipa::path(
    put,
    path = "/books/update/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookEnvelope),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    ApiJson(data): ApiJson<UpdateBook>,
) -> BookResult<Json<BookEnvelope>> {
    let book = state
        .services
        .books
        .update(&isbn, data)
        .await
        .map_err(BookError::during("Error updating book"))?;

    Ok(Json(BookEnvelope {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

/// Delete a book listing
#[utoipa::path(
    delete,
    path = "/books/delete/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> BookResult<Json<MessageResponse>> {
    state
        .services
        .books
        .delete(&isbn)
        .await
        .map_err(BookError::during("Error deleting book"))?;

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// Find a book listing by ISBN
#[utoipa::path(
    get,
    path = "/books/find/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn find_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> BookResult<Json<Book>> {
    let book = state
        .services
        .books
        .find_by_isbn(&isbn)
        .await
        .map_err(BookError::during("Error finding book"))?;
    Ok(Json(book))
}
