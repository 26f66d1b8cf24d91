//! Reisgids voor leraren
//!
//! A six-step research-journey guide for teachers, rendered from one static
//! step registry.
//!
//! - `registry`: ordered step records, validation and route lookups
//! - `navigation`: landing page / step page state machine
//! - `pages`: Askama templates for the landing, step and not-found pages
//! - `export`: writes the whole site to a directory
//! - `server`: Axum router with a page cache (feature `server`)

pub mod config;
pub mod error;
pub mod export;
pub mod navigation;
pub mod pages;
pub mod registry;
pub mod site;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{ExportError, RegistryError, RenderError};
pub use export::{export_site, ExportReport};
pub use navigation::{Location, NavigationError, Transition};
pub use pages::{render_home, render_not_found, render_route, render_step};
pub use registry::{ColorTheme, StepRecord, StepRegistry};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber used by the binaries.
///
/// Default log level: info for this crate, debug for request tracing, warn
/// for everything else. Override with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reisgids=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
