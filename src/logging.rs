use tracing::subscriber::SetGlobalDefaultError;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::formatter::TickFormatter;

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default filter, which keeps this crate at `info` and everything else at `warn`.
pub fn setup_logging() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))));

    let subscriber = FmtSubscriber::builder()
        .with_target(true)
        .event_format(TickFormatter)
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
}
