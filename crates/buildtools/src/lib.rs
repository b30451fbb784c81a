//! Build metadata generation: version numbers computed by pluggable build and revision number
//! strategies, optionally persisted between builds in a version file, and assembly info source
//! files declaring them.

pub mod assembly_info;
pub mod config;
pub mod date_utils;
pub mod emitter;
pub mod generator;
pub mod store;
pub mod strategy;
pub mod tasks;
pub mod version;

use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Installs a compact stderr subscriber. The level defaults to INFO and can be changed with the
/// `RUST_LOG` environment variable.
pub fn configure_tracing() {
    let fmt_layer =
        tracing_subscriber::fmt::layer().compact().with_target(false).with_writer(std::io::stderr);
    let level_filter_layer = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy();

    // This sets a single subscriber to all of the threads.
    tracing_subscriber::registry().with(fmt_layer).with(level_filter_layer).init();
}
