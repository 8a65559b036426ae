//! Book registry API handlers
//!
//! Contains HTTP request handlers for book CRUD operations.
//!
//! One deliberate wrinkle in the surface: a miss on `GET /books/get_book`
//! is reported as an ordinary 200 payload carrying an `error` field, not as
//! a 404. Update and delete misses do go through the error path.

use crate::error::AppError;
use crate::state::{AppState, Book};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Book response type
#[derive(Debug, Serialize, PartialEq)]
pub struct BookResponse {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Category the book is shelved under
    pub category: String,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
        }
    }
}

/// Lookup response for `GET /books/get_book/:book_title`
///
/// Serializes as the bare book object on a hit, or as
/// `{"error": "Book not found!"}` on a miss. Both carry a 200 status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    /// A book with a matching title was found
    Found(BookResponse),
    /// No title matched
    Miss {
        /// Human-readable miss message
        error: String,
    },
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Book payload for create and update requests
///
/// Update uses the same structured payload as create: the stored record is
/// replaced wholesale, so a field left empty here ends up empty in the
/// registry.
#[derive(Deserialize)]
pub struct BookPayload {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Category the book is shelved under
    pub category: String,
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Self {
            title: payload.title,
            author: payload.author,
            category: payload.category,
        }
    }
}

/// GET /books - List all books in registry order
pub async fn list_books(
    State(state): State<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let state = state.read().await;
    let books: Vec<BookResponse> = state.books_list().iter().map(BookResponse::from).collect();

    Ok(Json(books))
}

/// GET /books/get_book/:book_title - Look up the first case-insensitive title match
pub async fn get_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(book_title): Path<String>,
) -> Result<Json<LookupResponse>, AppError> {
    let state = state.read().await;
    let response = match state.find_book(&book_title) {
        Some(book) => LookupResponse::Found(BookResponse::from(book)),
        None => LookupResponse::Miss {
            error: "Book not found!".to_string(),
        },
    };

    Ok(Json(response))
}

/// POST /books/create_book - Append a book to the registry
pub async fn create_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    // No constraint checking: empty fields and duplicate titles are accepted
    let mut state = state.write().await;
    state.add_book(payload.into());

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Book added successfully".to_string(),
        }),
    ))
}

/// PUT /books/update_book - Replace the first title match wholesale
pub async fn update_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<BookResponse>, AppError> {
    let title = payload.title.clone();

    let mut state = state.write().await;
    if !state.replace_book(payload.into()) {
        return Err(AppError::BookNotFound(title));
    }

    let book = state
        .find_book(&title)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Book missing after update")))?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/delete_book/:book_title - Remove the first title match
///
/// The full sequence is scanned; a match at any position removes the entry
/// and acknowledges success.
pub async fn delete_book(
    State(state): State<Arc<RwLock<AppState>>>,
    Path(book_title): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut state = state.write().await;
    state
        .remove_book(&book_title)
        .ok_or_else(|| AppError::BookNotFound(book_title))?;

    Ok(Json(MessageResponse {
        message: "Book deleted successfully!".to_string(),
    }))
}
