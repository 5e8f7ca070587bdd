//! Logging setup for the catalog binaries

use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

const PRODUCTION_DIRECTIVES: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";
const DEVELOPMENT_DIRECTIVES: &str = "debug,tower_http=debug,sea_orm=info,sqlx=warn";

/// Install color-eyre report hooks (error location shown, env section hidden).
///
/// Ignores a second installation, so tests may call it freely.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is not set
pub fn default_directives(environment: Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_DIRECTIVES
    } else {
        DEVELOPMENT_DIRECTIVES
    }
}

/// Install the global subscriber.
///
/// Production emits flattened JSON lines without targets; development uses the
/// pretty formatter. Both carry a `tracing_error::ErrorLayer` so eyre reports
/// include span traces. `RUST_LOG` replaces the default directives.
///
/// Returns `false` when a subscriber was already installed (tests).
pub fn init_tracing(environment: &Environment) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(*environment)));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(false),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init()
    };

    let installed = result.is_ok();
    if installed {
        ::tracing::info!(?environment, "Tracing initialized");
    }
    installed
}
