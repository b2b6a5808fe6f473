use tracing::Level;

/// Controls the verbosity and formatting of the `tracing` subscriber installed at startup.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    pub level: Level,
    pub show_time: bool,
    pub compact: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            show_time: false,
            compact: true,
        }
    }
}

impl LogConfig {
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            show_time: true,
            compact: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            level: Level::WARN,
            show_time: false,
            compact: true,
        }
    }
}
