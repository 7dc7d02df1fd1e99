use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `EnvFilter` syntax.
const LOG_ENV: &str = "PROMPTIDE_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    promptide::app::cli::run();
}
