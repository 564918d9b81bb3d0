use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use self::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Prefix of environment variables overriding config values, e.g.
/// `PORTFOLIO__EMAILJS__PUBLIC_KEY`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Environment variable listing additional config files, separated by `:`.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Returns the default config file followed by the files listed in
/// [`CONFIG_PATHS_ENV`].
pub fn config_paths() -> Vec<PathBuf> {
    let extra = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(extra_paths(&extra))
        .collect()
}

fn extra_paths(value: &str) -> impl Iterator<Item = PathBuf> + '_ {
    value
        .split(':')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_overrides(paths, &[])
}

/// Loads the config files in order, then applies the inline TOML `overrides`
/// and finally the environment.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, &content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient_name: String,
}

/// Credentials of the EmailJS account delivering contact messages.
///
/// All of them are optional here. A missing or blank value is only reported
/// when a message is actually submitted.
#[derive(Debug, Default, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub send_endpoint_override: Option<Url>,
    pub timeout: Option<Duration>,
}
