use tracing_subscriber::{fmt::time::SystemTime, EnvFilter};

use super::structs::LogConfig;

fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_env_filter(env_filter);

    if config.compact {
        if config.show_time {
            subscriber.compact().with_timer(SystemTime).try_init()?;
        } else {
            subscriber.compact().without_time().try_init()?;
        }
    } else if config.show_time {
        subscriber.with_timer(SystemTime).try_init()?;
    } else {
        subscriber.without_time().try_init()?;
    }

    Ok(())
}

/// Picks a [`LogConfig`] from the CLI's verbosity flags and installs it as the global subscriber.
pub fn init_cli(verbose: bool, quiet: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = match (verbose, quiet) {
        (true, _) => LogConfig::verbose(),
        (false, true) => LogConfig::quiet(),
        (false, false) => LogConfig::default(),
    };
    init_logging(config)
}
