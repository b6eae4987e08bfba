use biblio_types::{Book, BookInput, BookSearch};
use url::form_urlencoded;

use crate::error::{require_token, ApiError};
use crate::gateway::{Gateway, RequestOptions};
use crate::loans;

pub async fn list(gateway: &Gateway, token: Option<&str>) -> Result<Vec<Book>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/books", Some(token), RequestOptions::get())
        .await
}

pub async fn get(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<Book, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(&format!("/api/books/{id}"), Some(token), RequestOptions::get())
        .await
}

pub async fn create(gateway: &Gateway, book: &BookInput, token: Option<&str>) -> Result<Book, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/books", Some(token), RequestOptions::post_json(book)?)
        .await
}

pub async fn update(
    gateway: &Gateway,
    id: i64,
    book: &BookInput,
    token: Option<&str>,
) -> Result<Book, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(
            &format!("/api/books/{id}"),
            Some(token),
            RequestOptions::put_json(book)?,
        )
        .await
}

pub async fn delete(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<(), ApiError> {
    let token = require_token(token)?;
    gateway
        .send(&format!("/api/books/{id}"), Some(token), RequestOptions::delete())
        .await
}

pub async fn search(
    gateway: &Gateway,
    criteria: &BookSearch,
    token: Option<&str>,
) -> Result<Vec<Book>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(&search_endpoint(criteria), Some(token), RequestOptions::get())
        .await
}

/// Builds the search path; with no criterion this is the plain listing.
pub fn search_endpoint(criteria: &BookSearch) -> String {
    let pairs = criteria.pairs();
    if pairs.is_empty() {
        return "/api/books".into();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("/api/books/search?{query}")
}

/// A book is available when none of its loans is still open.
pub async fn is_available(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<bool, ApiError> {
    let history = loans::for_book(gateway, id, token).await?;
    Ok(!history.iter().any(|loan| loan.statut.is_open()))
}
