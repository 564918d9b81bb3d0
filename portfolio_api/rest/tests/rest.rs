use std::net::{Ipv4Addr, SocketAddr};

use portfolio_api_rest::{RestServer, RestServerConfig};
use portfolio_content::CATALOG;
use portfolio_core_content_contracts::{ContentService, MockContentService};
use portfolio_core_content_impl::ContentServiceImpl;
use portfolio_models::content::project::{ProjectCategory, ProjectFilter};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[tokio::test]
async fn health() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let response = get(&base, "/health").await;

    assert_eq!(response.0, StatusCode::OK);
    assert_eq!(response.1["http"], true);
}

#[tokio::test]
async fn pages() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/pages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);
    assert_eq!(
        body[0],
        json!({"page": "home", "name": "Home", "path": "/"})
    );
    assert_eq!(body[7]["path"], "/contact");
}

#[tokio::test]
async fn profile() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Melak Sisay");
    assert_eq!(body["social_links"][0]["platform"], "github");
}

#[tokio::test]
async fn skills_and_experience() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (_, skills) = get(&base, "/skills").await;
    let (_, experience) = get(&base, "/experience").await;

    assert_eq!(skills["groups"][0]["title"], "Backend Development");
    assert_eq!(experience["positions"][0]["duration"], "October 2024 - Present");
    assert_eq!(experience["positions"][0]["current"], true);
    assert_eq!(experience["education"]["institution"], "Gondar University");
}

#[tokio::test]
async fn projects_filtered() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/projects?category=payment&search=telebirr").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Kpay Payment Gateway");
    assert_eq!(body[0]["category"], "payment");
    assert_eq!(body[0]["category_name"], "Payment Systems");
}

#[tokio::test]
async fn projects_query_is_passed_on() {
    let content = MockContentService::new().with_projects(
        ProjectFilter {
            category: Some(ProjectCategory::Tools),
            search: Some("calendar".into()),
        },
        vec![],
    );
    let base = spawn(content).await;

    let (status, body) = get(&base, "/projects?category=tools&search=calendar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn projects_all_category() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (_, body) = get(&base, "/projects?category=all").await;

    assert_eq!(body.as_array().unwrap().len(), CATALOG.projects.len());
}

#[tokio::test]
async fn projects_unknown_category() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/projects?category=games").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("games"));
}

#[tokio::test]
async fn blog() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/blog").await;

    assert_eq!(status, StatusCode::OK);
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(body["featured"]["published"], "2024-12-15");
    assert_eq!(posts.len(), CATALOG.blog_posts.len() - 1);
    assert!(posts
        .iter()
        .all(|post| post["slug"] != body["featured"]["slug"]));
}

#[tokio::test]
async fn blog_by_tag() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/blog?tag=payments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["featured"], Value::Null);
    assert_eq!(
        body["posts"][0]["title"],
        "Payment Gateway Integration: Best Practices"
    );
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn blog_post() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/blog/event-driven-architectures").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["read_time_minutes"], 9);
    assert_eq!(body["tags"], json!(["microservices", "backend"]));
}

#[tokio::test]
async fn blog_post_not_found() {
    let base = spawn(ContentServiceImpl::new(*CATALOG)).await;

    let (status, body) = get(&base, "/blog/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Blog post not found"}));
}

#[tokio::test]
async fn cors() {
    let base = spawn_with_config(
        ContentServiceImpl::new(*CATALOG),
        RestServerConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
        },
    )
    .await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("{base}/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    let denied = client
        .get(format!("{base}/health"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert!(denied
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

async fn spawn(content: impl ContentService) -> String {
    spawn_with_config(content, RestServerConfig::default()).await
}

async fn spawn_with_config(content: impl ContentService, config: RestServerConfig) -> String {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(RestServer::new(content, config).serve_on(listener));

    format!("http://{addr}")
}

async fn get(base: &str, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}
