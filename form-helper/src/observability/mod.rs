//! Observability (logging and tracing)
//!
//! Builders emit `tracing` events; this module installs a subscriber for
//! binaries and tests that want to see them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Pretty in debug builds, JSON in release
    #[must_use]
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_directive(self) -> &'static str {
        match self {
            Self::Pretty => "debug,form_helper=trace",
            Self::Json => "info",
        }
    }
}

/// Initialize the tracing subscriber for the current build profile
///
/// # Example
///
/// ```rust,no_run
/// use form_helper::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    init_with(LogFormat::for_build())
}

/// Initialize the tracing subscriber with an explicit format
///
/// `RUST_LOG` overrides [`LogFormat::default_directive`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format.default_directive()));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }
    Ok(())
}
