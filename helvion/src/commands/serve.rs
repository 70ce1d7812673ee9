use helvion_config::Config;
use helvion_email_contracts::EmailService;
use tracing::{error, info, warn};

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.smtp)?;
    if let Err(err) = email.ping().await {
        warn!("smtp server is unreachable, contact messages will fail: {err:#}");
    }

    let provider = Provider::new(ConfigProvider::new(&config), email);
    let server = provider.rest_server();

    info!("Starting http server on {}", config.http.address);
    server.serve(config.http.address, shutdown_signal()).await?;
    info!("Http server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(err) => {
            error!("Failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    }
}
