use netid_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout only carries resolution results
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(true)
            .with_thread_ids(false)
            .with_level(true)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .init();
    }

    info!("Logging initialized at level: {}", config.logging.level);
}
