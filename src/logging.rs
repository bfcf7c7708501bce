use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::LumenError;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "lumenator=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber, writing formatted events to stderr.
///
/// `RUST_LOG` overrides the level picked from `verbose`. Fails if a global
/// subscriber is already set.
pub fn init_tracing(verbose: bool) -> Result<(), LumenError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}
