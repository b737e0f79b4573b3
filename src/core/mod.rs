pub mod aggregator;
pub mod domains;
pub mod endpoint;
pub mod engine;
pub mod fetcher;
pub mod normalize;

pub use crate::domain::model::{
    Aggregate, DomainCount, DomainFailure, FetchOutcome, UserRecord,
};
pub use crate::domain::ports::{ConfigProvider, ReportSink, Storage, UserSource};
pub use crate::utils::error::Result;
