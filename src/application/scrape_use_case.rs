// ============================================================
// Layer 2 — ScrapeUseCase
// ============================================================
//   Step 1: Build the HTTP fetcher     (Layer 4 - data)
//   Step 2: Fetch and extract each URL (Layer 4 - data)
//   Step 3: Flatten pages to a buffer  (Layer 3 - domain)
//   Step 4: Write the buffer once      (Layer 6 - infra)

use anyhow::Result;
use std::time::Duration;

use crate::data::fetcher::{scrape_all, HttpFetcher};
use crate::domain::traits::PageFetcher;
use crate::infra::text_store::write_text;

/// Agile and Kanban sources scraped when no URLs are given
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://en.wikipedia.org/wiki/Agile_software_development",
    "https://www.scrum.org/resources/blog",
    "https://sochova.com/blog",
    "https://kanbandan.com/blog",
    "https://djaa.com/blog",
    "https://ddegrandis.com/blog",
];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub output:       String,
    pub timeout_secs: u64,
    pub urls:         Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output:       "agile_scraped_data.txt".to_string(),
            timeout_secs: 10,
            urls:         DEFAULT_SOURCES.iter().map(|u| u.to_string()).collect(),
        }
    }
}

/// Counts reported back to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub succeeded: usize,
    pub failed:    usize,
    pub bytes:     usize,
}

pub struct ScrapeUseCase {
    config: ScrapeConfig,
}

impl ScrapeUseCase {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape over real HTTP.
    pub fn execute(&self) -> Result<ScrapeSummary> {
        let fetcher = HttpFetcher::new(Duration::from_secs(self.config.timeout_secs))?;
        self.execute_with(&fetcher)
    }

    /// Scrape through any fetcher, then write the buffer.
    pub fn execute_with<F: PageFetcher>(&self, fetcher: &F) -> Result<ScrapeSummary> {
        let cfg = &self.config;

        let outcome = scrape_all(fetcher, &cfg.urls);
        for failure in &outcome.failures {
            tracing::debug!("Skipped {}: {}", failure.url, failure.reason);
        }
        let buffer  = outcome.render();

        // Written only after every URL has been attempted
        write_text(&cfg.output, &buffer)?;

        let summary = ScrapeSummary {
            succeeded: outcome.pages.len(),
            failed:    outcome.failures.len(),
            bytes:     buffer.len(),
        };
        tracing::info!(
            "Scraped {} of {} URLs ({} failed), {} bytes",
            summary.succeeded,
            cfg.urls.len(),
            summary.failed,
            summary.bytes
        );
        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::fs;

    struct FakeFetcher;

    impl PageFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<String> {
            match url {
                "https://up.example" => Ok("<h2>Kanban</h2><p>Limit WIP.</p>".to_string()),
                _ => bail!("connection refused"),
            }
        }
    }

    #[test]
    fn test_failed_url_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("scraped.txt");
        let use_case = ScrapeUseCase::new(ScrapeConfig {
            output:       output.to_str().unwrap().to_string(),
            timeout_secs: 10,
            urls:         vec!["https://down.example".into(), "https://up.example".into()],
        });

        let summary = use_case.execute_with(&FakeFetcher).unwrap();
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "\n\n### Content from https://up.example ###\n\n\n\n**Kanban**\n\nLimit WIP.\n\n"
        );
        assert_eq!(summary.bytes, written.len());
    }

    #[test]
    fn test_default_sources() {
        let cfg = ScrapeConfig::default();
        assert_eq!(cfg.urls.len(), 6);
        assert_eq!(cfg.output, "agile_scraped_data.txt");
        assert_eq!(cfg.timeout_secs, 10);
    }
}
