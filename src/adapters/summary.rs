//! End-of-run console output. Everything colored or terminal-specific lives
//! here and is called once, after the reports are on disk.

use crate::core::engine::RunSummary;
use crossterm::style::Stylize;
use std::io::{IsTerminal, Write};
use std::path::Path;

const BANNER: &str = r#"
.  .   .  ..--.      .   .                      .--.                     .
 \  \ /  / |   )     |   |                      |   )                   _|_
  \  \  /  |--'      |   |.--. .-. .--..--.     |--'  .-. .,-.  .-. .--. |
   \/ \/   |         :   ;`--.(.-' |   `--.     |  \ (.-' |   )(   )|    |
    ' '    '          `-' `--' `--''   `--'     '   ` `--'|`-'  `-' '    `-'
                                                          |
"#;

const RULE: &str = "----------------------------------------------------------------------------";

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter {
    quiet: bool,
    clear_screen: bool,
}

impl SummaryReporter {
    pub fn new(quiet: bool, clear_screen: bool) -> Self {
        Self {
            quiet,
            clear_screen,
        }
    }

    pub fn print(&self, summary: &RunSummary, output_dir: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        if self.clear_screen && !self.quiet && stdout.is_terminal() {
            crossterm::execute!(
                stdout,
                crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
                crossterm::cursor::MoveTo(0, 0)
            )?;
        }
        let mut out = stdout.lock();
        self.write_to(&mut out, summary, output_dir)?;
        out.flush()
    }

    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        summary: &RunSummary,
        output_dir: &str,
    ) -> std::io::Result<()> {
        if !self.quiet {
            writeln!(out, "{}", BANNER.yellow())?;
            writeln!(out, "{}", "WordPress REST API users report".cyan().bold())?;
            writeln!(out, "{}\n", RULE.cyan())?;
            writeln!(out, "{}\n", "Result: Report generated successfully!".green())?;
        } else {
            writeln!(out, "Result: Report generated successfully!")?;
        }

        writeln!(out, "Domains processed: {}", summary.domains_processed())?;
        writeln!(out, "Users found:       {}", summary.total_users)?;
        if !summary.failures.is_empty() {
            writeln!(out, "Failed domains:    {}", summary.failures.len())?;
            for failure in &summary.failures {
                writeln!(out, "  - {}: {}", failure.domain, failure.reason)?;
            }
        }
        writeln!(out, "Elapsed:           {:.2?}", summary.elapsed)?;
        writeln!(
            out,
            "Generated at:      {}",
            summary.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "Output files:")?;
        for file in &summary.files {
            writeln!(out, "  {}", Path::new(output_dir).join(file).display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DomainCount, DomainFailure};
    use std::time::Duration;

    fn summary() -> RunSummary {
        RunSummary {
            counts: vec![
                DomainCount::new("example.com", 2),
                DomainCount::new("badhost.invalid", 0),
            ],
            failures: vec![DomainFailure {
                domain: "badhost.invalid".to_string(),
                reason: "dns error".to_string(),
            }],
            total_users: 2,
            files: vec!["example.com.csv".to_string(), "wur-report.html".to_string()],
            elapsed: Duration::from_millis(1200),
            generated_at: chrono::Local::now(),
        }
    }

    #[test]
    fn test_quiet_summary_lists_counts_failures_and_files() {
        let mut buf = Vec::new();

        SummaryReporter::new(true, false)
            .write_to(&mut buf, &summary(), "reports")
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Result: Report generated successfully!"));
        assert!(text.contains("Domains processed: 2"));
        assert!(text.contains("Users found:       2"));
        assert!(text.contains("  - badhost.invalid: dns error"));
        let expected = Path::new("reports").join("wur-report.html");
        assert!(text.contains(&expected.display().to_string()));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_full_summary_has_banner() {
        let mut buf = Vec::new();

        SummaryReporter::new(false, false)
            .write_to(&mut buf, &summary(), "reports")
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Report generated successfully!"));
        assert!(text.contains("_|_"));
    }
}
