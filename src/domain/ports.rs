use crate::domain::model::{DomainCount, FetchOutcome, UserRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn domains_file(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn scheme(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn concurrent_requests(&self) -> usize;
}

/// Source of normalized user records for one domain. Never fails: problems
/// are reported through `FetchOutcome::failure`.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch(&self, domain: &str) -> FetchOutcome;
}

/// Output side of the pipeline. Any error is fatal for the run.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_table(&self, path: &str, records: &[UserRecord]) -> Result<()>;
    async fn write_document(
        &self,
        path: &str,
        all_records: &[UserRecord],
        counts: &[DomainCount],
    ) -> Result<()>;
}
