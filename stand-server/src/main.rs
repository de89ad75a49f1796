use stand_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, work dir, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_to_file.then(|| config.logs_dir()),
    );

    print_banner();
    tracing::info!("🍔 Stand Server starting...");

    // 2. Initialize server state (database, bus, auth, photo store)
    let state = ServerState::initialize(&config).await;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
