use std::{env, io};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "HELLOCGI_LOG";

/// Installs the global subscriber. Logs go to stderr since stdout carries the
/// CGI response. `$HELLOCGI_LOG` overrides `default_filter`.
pub fn init(default_filter: &str) {
    let filter = select_filter(env::var(LOG_ENV).ok().as_deref(), default_filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .ok();
}

/// Uses the override when it holds valid directives, else `default_filter`.
fn select_filter(env_filter: Option<&str>, default_filter: &str) -> EnvFilter {
    env_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}
