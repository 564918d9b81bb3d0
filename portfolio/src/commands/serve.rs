use portfolio_config::Config;
use tracing::info;

use crate::environment::Environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let environment = Environment::new(&config)?;
    let server = environment.rest_server();

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
