pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::adapters::{emitter::ReportEmitter, summary::SummaryReporter};
pub use crate::core::{
    aggregator::Aggregator,
    endpoint::ApiEndpoint,
    engine::{ReportEngine, RunSummary},
    fetcher::WpUserFetcher,
};
pub use crate::domain::model::{DomainCount, UserRecord};
pub use crate::utils::error::{Result, WurError};
