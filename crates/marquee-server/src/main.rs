use anyhow::Context;
use marquee_config::AppConfig;
use marquee_server::{serve, ServerState};
use tokio::net::TcpListener;

/// `PORT` / `HOST` from the environment (or `.env`) win over the config file
fn bind_address(config: &AppConfig) -> anyhow::Result<String> {
    let mut server = config.server.clone();
    if let Ok(host) = std::env::var("HOST") {
        server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        server.port = port
            .parse()
            .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
    }
    Ok(server.bind_address())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let address = bind_address(&config)?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    serve(listener, ServerState::seeded()).await
}
