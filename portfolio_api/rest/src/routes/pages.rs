use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use portfolio_core_content_contracts::ContentService;
use portfolio_models::content::profile::Profile;

use crate::models::content::{ApiExperience, ApiPage, ApiServices, ApiSkills};

pub fn router(service: Arc<impl ContentService>) -> Router<()> {
    Router::new()
        .route("/pages", routing::get(pages))
        .route("/profile", routing::get(profile))
        .route("/skills", routing::get(skills))
        .route("/experience", routing::get(experience))
        .route("/services", routing::get(services))
        .with_state(service)
}

async fn pages(service: State<Arc<impl ContentService>>) -> Json<Vec<ApiPage>> {
    Json(service.pages().iter().copied().map(Into::into).collect())
}

async fn profile(service: State<Arc<impl ContentService>>) -> Json<&'static Profile> {
    Json(service.profile())
}

async fn skills(service: State<Arc<impl ContentService>>) -> Json<ApiSkills> {
    Json(ApiSkills {
        groups: service.skill_groups().iter().map(Into::into).collect(),
        proficiencies: service.proficiencies(),
    })
}

async fn experience(service: State<Arc<impl ContentService>>) -> Json<ApiExperience> {
    Json(ApiExperience {
        positions: service.experience().iter().map(Into::into).collect(),
        education: service.education(),
    })
}

async fn services(service: State<Arc<impl ContentService>>) -> Json<ApiServices> {
    Json(ApiServices {
        services: service.services(),
        process: service.process(),
    })
}
