use storefront::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env and logging
    setup_environment()?;

    print_banner();

    // 2. Configuration
    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Urban Plate storefront starting..."
    );

    // 3. Session state
    let state = ServerState::initialize(&config);

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
