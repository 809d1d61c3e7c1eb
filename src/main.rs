use screenings::{AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,screenings=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    tracing::info!(store = %state.store.url(), "using store");

    let app = screenings::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
