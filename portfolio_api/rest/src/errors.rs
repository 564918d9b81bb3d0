use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const BLOG_POST_NOT_FOUND: &str = "Blog post not found";

pub fn error(code: StatusCode, detail: impl Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}
