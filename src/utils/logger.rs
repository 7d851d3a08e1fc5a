use crate::config::SiteConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("geosite=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geosite=info"))
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    // a host application may already own the global subscriber
    if let Err(e) = installed {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}

/// Verbosity from the `[logging]` section.
pub fn init_logger_from(config: &SiteConfig) {
    init_logger(config.logging.verbose);
}

pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geosite=info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logger(true);
        init_logger(false);
        init_json_logger();
        tracing::info!("logger initialised");
    }

    #[test]
    fn test_init_from_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[gateway]
base_url = "https://pgsi.in/"

[logging]
verbose = true
"#,
        )
        .unwrap();

        assert!(config.logging.verbose);
        init_logger_from(&config);
        tracing::debug!("verbose logging requested by config");
    }
}
