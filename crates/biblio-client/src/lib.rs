#![allow(non_snake_case)]

pub mod auth;
pub mod books;
pub mod error;
pub mod gateway;
pub mod loans;
pub mod users;

pub use error::{require_token, ApiError};
pub use gateway::{Gateway, GatewayConfig, RequestBody, RequestOptions, DEFAULT_BASE_ORIGIN};
