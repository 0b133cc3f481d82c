//! Extractors that turn axum rejections into [`ServerError`] so a bad body or
//! a bad path segment gets the same JSON error shape as everything else.

use axum::extract::{FromRequest, FromRequestParts};

use crate::ServerError;

/// `axum::Json` with a [`ServerError`] rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with a [`ServerError`] rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServerError))]
pub struct ApiPath<T>(pub T);
