//! Server functions bridging the pages to the backend gateway.
//!
//! Each one forwards the caller's token unchanged; a missing token is
//! rejected by the gateway layer before any request leaves the server.

use biblio_types::{
    AuthResponse, Book, BookInput, BookSearch, Loan, LoanRequest, LoginRequest, RegisterRequest,
    User, UserUpdate,
};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
fn gateway() -> Result<biblio_client::Gateway, ServerFnError> {
    use_context::<biblio_client::Gateway>()
        .ok_or_else(|| ServerFnError::new("backend gateway unavailable"))
}

#[cfg(feature = "ssr")]
fn backend_error(e: biblio_client::ApiError) -> ServerFnError {
    ServerFnError::new(e)
}

/// Message to show the user for a failed server function.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

#[server]
pub async fn login(request: LoginRequest) -> Result<AuthResponse, ServerFnError> {
    biblio_client::auth::login(&gateway()?, &request)
        .await
        .map_err(backend_error)
}

#[server]
pub async fn register(request: RegisterRequest) -> Result<AuthResponse, ServerFnError> {
    biblio_client::auth::register(&gateway()?, &request)
        .await
        .map_err(backend_error)
}

#[server]
pub async fn list_books(token: Option<String>) -> Result<Vec<Book>, ServerFnError> {
    biblio_client::books::list(&gateway()?, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn search_books(
    criteria: BookSearch,
    token: Option<String>,
) -> Result<Vec<Book>, ServerFnError> {
    biblio_client::books::search(&gateway()?, &criteria, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn create_book(book: BookInput, token: Option<String>) -> Result<Book, ServerFnError> {
    biblio_client::books::create(&gateway()?, &book, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn update_book(
    id: i64,
    book: BookInput,
    token: Option<String>,
) -> Result<Book, ServerFnError> {
    biblio_client::books::update(&gateway()?, id, &book, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn delete_book(id: i64, token: Option<String>) -> Result<(), ServerFnError> {
    biblio_client::books::delete(&gateway()?, id, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn book_available(id: i64, token: Option<String>) -> Result<bool, ServerFnError> {
    biblio_client::books::is_available(&gateway()?, id, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn list_users(token: Option<String>) -> Result<Vec<User>, ServerFnError> {
    biblio_client::users::list(&gateway()?, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn update_user(
    id: i64,
    update: UserUpdate,
    token: Option<String>,
) -> Result<User, ServerFnError> {
    biblio_client::users::update(&gateway()?, id, &update, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn delete_user(id: i64, token: Option<String>) -> Result<(), ServerFnError> {
    biblio_client::users::delete(&gateway()?, id, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn list_loans(token: Option<String>) -> Result<Vec<Loan>, ServerFnError> {
    biblio_client::loans::list(&gateway()?, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn overdue_loans(token: Option<String>) -> Result<Vec<Loan>, ServerFnError> {
    biblio_client::loans::overdue(&gateway()?, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn user_loans(user_id: i64, token: Option<String>) -> Result<Vec<Loan>, ServerFnError> {
    biblio_client::loans::for_user(&gateway()?, user_id, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn book_loans(book_id: i64, token: Option<String>) -> Result<Vec<Loan>, ServerFnError> {
    biblio_client::loans::for_book(&gateway()?, book_id, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn create_loan(loan: LoanRequest, token: Option<String>) -> Result<Loan, ServerFnError> {
    biblio_client::loans::create(&gateway()?, &loan, token.as_deref())
        .await
        .map_err(backend_error)
}

#[server]
pub async fn return_loan(id: i64, token: Option<String>) -> Result<Loan, ServerFnError> {
    biblio_client::loans::return_loan(&gateway()?, id, token.as_deref())
        .await
        .map_err(backend_error)
}
