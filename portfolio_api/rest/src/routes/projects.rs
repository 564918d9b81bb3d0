use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_content_contracts::ContentService;
use portfolio_models::content::project::ProjectFilter;

use crate::{
    errors::error,
    models::{
        content::{ApiProject, ApiProjectsQuery},
        parse_keyword,
    },
};

pub fn router(service: Arc<impl ContentService>) -> Router<()> {
    Router::new()
        .route("/projects", routing::get(list_projects))
        .with_state(service)
}

async fn list_projects(
    service: State<Arc<impl ContentService>>,
    Query(query): Query<ApiProjectsQuery>,
) -> Response {
    let category = match parse_keyword(query.category.as_deref()) {
        Ok(category) => category,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };
    let filter = ProjectFilter {
        category,
        search: query.search,
    };

    let projects = service
        .projects(&filter)
        .into_iter()
        .map(ApiProject::from)
        .collect::<Vec<_>>();

    Json(projects).into_response()
}
