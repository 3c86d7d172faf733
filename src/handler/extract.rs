//! Extractors that report rejections as [`AppError::BadRequest`] instead of
//! axum's plain-text 400/415/422 responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::handler::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
