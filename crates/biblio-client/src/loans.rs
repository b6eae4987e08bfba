use biblio_types::{Loan, LoanRequest};

use crate::error::{require_token, ApiError};
use crate::gateway::{Gateway, RequestOptions};

pub async fn list(gateway: &Gateway, token: Option<&str>) -> Result<Vec<Loan>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/loans", Some(token), RequestOptions::get())
        .await
}

pub async fn get(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<Loan, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(&format!("/api/loans/{id}"), Some(token), RequestOptions::get())
        .await
}

pub async fn create(gateway: &Gateway, loan: &LoanRequest, token: Option<&str>) -> Result<Loan, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/loans", Some(token), RequestOptions::post_json(loan)?)
        .await
}

pub async fn return_loan(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<Loan, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(
            &format!("/api/loans/{id}/return"),
            Some(token),
            RequestOptions::put(),
        )
        .await
}

pub async fn for_user(gateway: &Gateway, userId: i64, token: Option<&str>) -> Result<Vec<Loan>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(
            &format!("/api/loans/user/{userId}"),
            Some(token),
            RequestOptions::get(),
        )
        .await
}

pub async fn for_book(gateway: &Gateway, bookId: i64, token: Option<&str>) -> Result<Vec<Loan>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(
            &format!("/api/loans/book/{bookId}"),
            Some(token),
            RequestOptions::get(),
        )
        .await
}

pub async fn overdue(gateway: &Gateway, token: Option<&str>) -> Result<Vec<Loan>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/loans/overdue", Some(token), RequestOptions::get())
        .await
}
