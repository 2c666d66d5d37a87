use gambit_server::{api, config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load()?;
    let app = api::router(&config);

    let listener = TcpListener::bind(config.bind.as_str()).await?;
    tracing::info!(
        addr = %config.bind,
        depth = config.depth,
        move_time_ms = config.move_time_ms,
        "gambit server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
