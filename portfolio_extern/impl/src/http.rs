use std::{ops::Deref, sync::LazyLock, time::Duration};

use anyhow::Context;
use portfolio_utils::{portfolio_version, Apply};

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = portfolio_version();

    format!("Melak Sisay Portfolio ({homepage}, {repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

/// The HTTP client shared by all external API services.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .apply_map(timeout, |builder, timeout| builder.timeout(timeout))
            .build()
            .map(Self)
            .context("Failed to build HTTP client")
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
