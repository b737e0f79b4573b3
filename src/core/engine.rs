use crate::core::aggregator::Aggregator;
use crate::core::{DomainCount, DomainFailure, ReportSink, UserSource};
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

pub const GLOBAL_TABLE_NAME: &str = "wur-report.csv";
pub const DOCUMENT_NAME: &str = "wur-report.html";

/// What a finished run produced; handed to the summary reporter.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub counts: Vec<DomainCount>,
    pub failures: Vec<DomainFailure>,
    pub total_users: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
    pub elapsed: Duration,
    pub generated_at: DateTime<Local>,
}

impl RunSummary {
    pub fn domains_processed(&self) -> usize {
        self.counts.len()
    }
}

pub struct ReportEngine<F: UserSource, R: ReportSink> {
    source: F,
    sink: R,
    concurrency: usize,
}

impl<F: UserSource, R: ReportSink> ReportEngine<F, R> {
    pub fn new(source: F, sink: R) -> Self {
        Self {
            source,
            sink,
            concurrency: 1,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub async fn run(&self, domains: &[String]) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("Querying {} domains", domains.len());

        let aggregate = Aggregator::new(&self.source, &self.sink)
            .with_concurrency(self.concurrency)
            .run(domains)
            .await?;
        tracing::info!(
            "Collected {} users from {} domains ({} failed)",
            aggregate.total_users(),
            aggregate.counts.len(),
            aggregate.failures.len()
        );

        self.sink
            .write_table(GLOBAL_TABLE_NAME, &aggregate.records)
            .await?;
        self.sink
            .write_document(DOCUMENT_NAME, &aggregate.records, &aggregate.counts)
            .await?;
        tracing::info!("Wrote {} and {}", GLOBAL_TABLE_NAME, DOCUMENT_NAME);

        let total_users = aggregate.total_users();
        let mut files = aggregate.tables_written;
        files.push(GLOBAL_TABLE_NAME.to_string());
        files.push(DOCUMENT_NAME.to_string());

        Ok(RunSummary {
            counts: aggregate.counts,
            failures: aggregate.failures,
            total_users,
            files,
            elapsed: started.elapsed(),
            generated_at: Local::now(),
        })
    }
}
