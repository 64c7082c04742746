use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    if let Err(err) = balance_engine::app::run(std::env::args()) {
        tracing::error!(error = %err, "pipeline failed");
        std::process::exit(1);
    }
}
