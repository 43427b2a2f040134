use breachx::{
    build_router,
    config::{AppConfig, Args},
    init_tracing,
    state::AppState,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(args.log_json);

    let config = AppConfig::try_from(args)?;
    let listen = config.listen;

    tracing::info!(
        provider = config.provider_url.as_str(),
        indeterminate = ?config.indeterminate,
        "Initializing breach lookup provider"
    );
    let app_state = AppState::init(config)?;

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(%listen, "🚀 Server started successfully");
    axum::serve(listener, app).await?;

    Ok(())
}
