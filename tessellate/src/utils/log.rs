use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// # Errors
///
/// Errors if a global subscriber was already installed.
pub fn setup_logging(default_level: &str) -> anyhow::Result<()> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using debug: {}", level, err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;

    #[test]
    fn valid_levels_parse() {
        assert!(parse_log_level("info").1.is_none());
        assert!(parse_log_level("tessellate_core=trace,warn").1.is_none());
    }

    #[test]
    fn invalid_levels_fall_back() {
        assert!(parse_log_level("tessellate_core=loud").1.is_some());
    }
}
