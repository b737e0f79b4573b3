use crate::adapters::{html::render_document, table::render_table};
use crate::core::endpoint::ApiEndpoint;
use crate::core::{DomainCount, ReportSink, Storage, UserRecord};
use crate::utils::error::Result;

/// Writes the CSV tables and the HTML document through a [`Storage`].
pub struct ReportEmitter<S: Storage> {
    storage: S,
    endpoint: ApiEndpoint,
}

impl<S: Storage> ReportEmitter<S> {
    pub fn new(storage: S, endpoint: ApiEndpoint) -> Self {
        Self { storage, endpoint }
    }
}

#[async_trait::async_trait]
impl<S: Storage> ReportSink for ReportEmitter<S> {
    async fn write_table(&self, path: &str, records: &[UserRecord]) -> Result<()> {
        let data = render_table(records)?;
        tracing::debug!("Writing table {} ({} bytes)", path, data.len());
        self.storage.write_file(path, &data).await
    }

    async fn write_document(
        &self,
        path: &str,
        all_records: &[UserRecord],
        counts: &[DomainCount],
    ) -> Result<()> {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let html = render_document(all_records, counts, &self.endpoint, &generated_at);
        tracing::debug!("Writing document {} ({} bytes)", path, html.len());
        self.storage.write_file(path, html.as_bytes()).await
    }
}
