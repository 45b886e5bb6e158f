use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_service::config::ServiceConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let config = ServiceConfig::from_env();
    tracing::info!(
        "Starting to-do list service on port {} (sessions in {})",
        config.port,
        config.session_dir.display()
    );

    if let Err(e) = web_service::server::run(config.session_dir, config.port).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
