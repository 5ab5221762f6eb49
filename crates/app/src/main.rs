//! Demo entry point.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = app::Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match app::run_demo(&config).await {
        Ok(summary) => tracing::info!(
            customer_id = %summary.customer_id,
            order_id = %summary.order_id,
            total = %summary.order_total,
            reward_points = %summary.reward_points,
            "demo complete"
        ),
        Err(error) => {
            tracing::error!(%error, "demo failed");
            std::process::exit(1);
        }
    }
}
