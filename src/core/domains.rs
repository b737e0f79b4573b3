use crate::utils::error::{Result, WurError};
use std::path::Path;

/// Parse a domain list: one bare host per line. Lines are trimmed; blank lines
/// and `#` comments are skipped; duplicates are kept.
pub fn parse_domains(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub async fn load_domains<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| WurError::InputFileError {
            path: path.display().to_string(),
            source,
        })?;

    let domains = parse_domains(&content);
    if domains.is_empty() {
        tracing::warn!("No domains found in {}", path.display());
    } else {
        tracing::info!("Loaded {} domains from {}", domains.len(), path.display());
    }
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_domains_trims_and_skips_blank_lines() {
        let content = "  example.com  \n\n\t\nblog.example.org\r\n# staging\nexample.com\n";

        let domains = parse_domains(content);

        assert_eq!(
            domains,
            vec!["example.com", "blog.example.org", "example.com"]
        );
    }

    #[tokio::test]
    async fn test_load_domains_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domains.txt");
        tokio::fs::write(&path, "a.com\nb.com\n").await.unwrap();

        let domains = load_domains(&path).await.unwrap();

        assert_eq!(domains, vec!["a.com", "b.com"]);
    }

    #[tokio::test]
    async fn test_missing_domain_list_is_input_error() {
        let dir = TempDir::new().unwrap();

        let err = load_domains(dir.path().join("nope.txt")).await.unwrap_err();

        assert!(matches!(err, WurError::InputFileError { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
