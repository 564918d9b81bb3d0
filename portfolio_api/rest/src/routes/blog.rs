use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_content_contracts::ContentService;

use crate::{
    errors::{error, BLOG_POST_NOT_FOUND},
    models::{
        content::{ApiBlog, ApiBlogQuery},
        parse_keyword,
    },
};

pub fn router(service: Arc<impl ContentService>) -> Router<()> {
    Router::new()
        .route("/blog", routing::get(list_posts))
        .route("/blog/:slug", routing::get(get_post))
        .with_state(service)
}

async fn list_posts(
    service: State<Arc<impl ContentService>>,
    Query(query): Query<ApiBlogQuery>,
) -> Response {
    let tag = match parse_keyword(query.tag.as_deref()) {
        Ok(tag) => tag,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };

    Json(ApiBlog {
        featured: service.featured_post(tag),
        posts: service.blog_posts(tag),
    })
    .into_response()
}

async fn get_post(service: State<Arc<impl ContentService>>, Path(slug): Path<String>) -> Response {
    match service.blog_post(&slug) {
        Some(post) => Json(post).into_response(),
        None => error(StatusCode::NOT_FOUND, BLOG_POST_NOT_FOUND),
    }
}
