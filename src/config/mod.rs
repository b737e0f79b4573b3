pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_provider, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_DOMAINS_FILE: &str = "domains.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_SCHEME: &str = "https";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "wur")]
#[command(about = "List the users exposed by WordPress REST APIs and build CSV/HTML reports")]
pub struct CliConfig {
    /// File with one bare domain per line
    #[arg(long, default_value = DEFAULT_DOMAINS_FILE)]
    pub input: String,

    /// Directory receiving the CSV and HTML reports
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// TOML configuration file; replaces the input/output/http flags
    #[arg(long)]
    pub config: Option<String>,

    /// Domains queried at the same time (1 = one after another)
    #[arg(long, default_value = "1")]
    pub concurrent_requests: usize,

    /// Per-request timeout; the HTTP client default applies when unset
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Print the summary without banner and colors")]
    pub quiet: bool,

    #[arg(long, help = "Clear the terminal before printing the summary")]
    pub clear_screen: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn domains_file(&self) -> &str {
        &self.input
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
