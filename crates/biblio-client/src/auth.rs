use biblio_types::{AuthResponse, LoginRequest, RegisterRequest};

use crate::error::ApiError;
use crate::gateway::{Gateway, RequestOptions};

pub async fn register(gateway: &Gateway, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    gateway
        .fetch("/api/users/register", None, RequestOptions::post_json(request)?)
        .await
}

pub async fn login(gateway: &Gateway, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    gateway
        .fetch("/api/users/login", None, RequestOptions::post_json(request)?)
        .await
}
