use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr so stdout stays clean for drafts and JSON.
fn setup_logging() {
    let filter =
        EnvFilter::try_from_env("MAILDRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    setup_logging();
    maildraft::app::cli::run();
}
