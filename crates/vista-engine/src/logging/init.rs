use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, for example
/// `"vista_engine=debug,vista_ui=trace"`. When unset, `RUST_LOG` is read and
/// the fallback level is `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    fn builder(self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Only the first call has an effect. A logger installed by someone else
/// (a test harness, the host application) is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builder_sets_filter() {
        let cfg = LoggingConfig::default().filter("vista_ui=debug");
        assert_eq!(cfg.env_filter.as_deref(), Some("vista_ui=debug"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default().filter("warn"));
        init_logging(LoggingConfig::default());
    }
}
