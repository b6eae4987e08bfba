use biblio_types::{User, UserUpdate};

use crate::error::{require_token, ApiError};
use crate::gateway::{Gateway, RequestOptions};

pub async fn list(gateway: &Gateway, token: Option<&str>) -> Result<Vec<User>, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch("/api/users", Some(token), RequestOptions::get())
        .await
}

pub async fn get(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<User, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(&format!("/api/users/{id}"), Some(token), RequestOptions::get())
        .await
}

pub async fn update(
    gateway: &Gateway,
    id: i64,
    update: &UserUpdate,
    token: Option<&str>,
) -> Result<User, ApiError> {
    let token = require_token(token)?;
    gateway
        .fetch(
            &format!("/api/users/{id}"),
            Some(token),
            RequestOptions::put_json(update)?,
        )
        .await
}

pub async fn delete(gateway: &Gateway, id: i64, token: Option<&str>) -> Result<(), ApiError> {
    let token = require_token(token)?;
    gateway
        .send(&format!("/api/users/{id}"), Some(token), RequestOptions::delete())
        .await
}
