use env_logger::Env;
use log::{LevelFilter, SetLoggerError};

/// Environment variable holding the log filter, e.g. `DENSE_ARRAY_LOG=debug`.
pub const LOG_ENV: &str = "DENSE_ARRAY_LOG";

/// Filter used when `DENSE_ARRAY_LOG` is unset.
pub const DEFAULT_FILTER: &str = "error,dense_array=info";

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), SetLoggerError> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
}
