use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

/// The credentials the fake server accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// The template parameters of an accepted send request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceivedEmail {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Debug)]
pub struct EmailJsState {
    credentials: EmailJsCredentials,
    received: Mutex<Vec<ReceivedEmail>>,
}

impl EmailJsState {
    pub fn new(credentials: EmailJsCredentials) -> Arc<Self> {
        Arc::new(Self {
            credentials,
            received: Default::default(),
        })
    }

    /// Returns the emails accepted so far, oldest first.
    pub fn received(&self) -> Vec<ReceivedEmail> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

pub fn router(state: Arc<EmailJsState>) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(state)
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    credentials: EmailJsCredentials,
) -> anyhow::Result<()> {
    info!("Starting emailjs testing server on {host}:{port}");
    info!("EmailJS send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Service ID: {:?}", credentials.service_id);
    info!("Template ID: {:?}", credentials.template_id);
    info!("Public key: {:?}", credentials.public_key);

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(EmailJsState::new(credentials)))
        .await
        .context("Failed to start HTTP server")
}

/// Starts the fake server on a random local port in the background and
/// returns its send endpoint.
pub async fn spawn(credentials: EmailJsCredentials) -> anyhow::Result<(Url, Arc<EmailJsState>)> {
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .context("Failed to bind to a local port")?;
    let addr = listener.local_addr()?;
    let state = EmailJsState::new(credentials);

    let router = router(Arc::clone(&state));
    tokio::spawn(async move { axum::serve(listener, router).await });

    let endpoint = format!("http://{addr}{SEND_ROUTE}").parse()?;
    Ok((endpoint, state))
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: ReceivedEmail,
}

async fn send(
    State(state): State<Arc<EmailJsState>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    let credentials = &state.credentials;
    if request.user_id != credentials.public_key {
        return (StatusCode::BAD_REQUEST, "The Public Key is invalid");
    }
    if request.service_id != credentials.service_id {
        return (StatusCode::BAD_REQUEST, "The service ID is invalid");
    }
    if request.template_id != credentials.template_id {
        return (StatusCode::BAD_REQUEST, "The template ID not found");
    }

    info!(
        from = %request.template_params.from_email,
        subject = %request.template_params.subject,
        "Received email"
    );
    match state.received.lock() {
        Ok(mut received) => received.push(request.template_params),
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    }

    (StatusCode::OK, "OK")
}
