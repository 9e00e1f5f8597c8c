//! Request extractors whose rejections render as [`ApiError::InvalidInput`].
//!
//! axum's stock `Json`/`Path` reject with plain-text 4xx bodies (422 for
//! unprocessable JSON); these wrappers keep every client error on the
//! structured 400 path instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonPayload<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);
