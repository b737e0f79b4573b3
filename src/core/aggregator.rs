use crate::core::{Aggregate, DomainCount, DomainFailure, ReportSink, UserSource};
use crate::utils::error::Result;
use futures::stream::{self, StreamExt};

/// File name of a domain's own table, e.g. `blog.example.com.csv`.
pub fn domain_table_name(domain: &str) -> String {
    format!("{}.csv", domain.replace("://", "_").replace('/', "_"))
}

/// Runs a [`UserSource`] over the domain list and collects the results.
///
/// Each domain's table is written as soon as that domain has been fetched,
/// before the next result is taken, so a slow or interrupted run keeps the
/// tables of the domains already processed. With `concurrency > 1` up to that
/// many requests are in flight, but results are still consumed in input order.
pub struct Aggregator<'a, F: UserSource, R: ReportSink> {
    source: &'a F,
    sink: &'a R,
    concurrency: usize,
}

impl<'a, F: UserSource, R: ReportSink> Aggregator<'a, F, R> {
    pub fn new(source: &'a F, sink: &'a R) -> Self {
        Self {
            source,
            sink,
            concurrency: 1,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn run(&self, domains: &[String]) -> Result<Aggregate> {
        let mut aggregate = Aggregate::default();
        let source = self.source;

        let mut outcomes = stream::iter(domains.iter())
            .map(|domain| async move { (domain, source.fetch(domain).await) })
            .buffered(self.concurrency);

        while let Some((domain, outcome)) = outcomes.next().await {
            let table = domain_table_name(domain);
            self.sink.write_table(&table, &outcome.records).await?;
            tracing::debug!("Wrote {} ({} rows)", table, outcome.records.len());
            aggregate.tables_written.push(table);

            aggregate
                .counts
                .push(DomainCount::new(domain.as_str(), outcome.count));
            if let Some(reason) = outcome.failure {
                aggregate.failures.push(DomainFailure {
                    domain: domain.clone(),
                    reason,
                });
            }
            aggregate.records.extend(outcome.records);
        }

        Ok(aggregate)
    }
}
