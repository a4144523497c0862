use shortio::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real env vars win either way.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    shortio::server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes priority over the configured log level; `LOG_FORMAT=json`
/// switches the output to JSON lines.
fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
