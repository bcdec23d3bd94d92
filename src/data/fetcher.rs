// ============================================================
// Layer 4 — Page Fetcher
// ============================================================
// Downloads each source URL and flattens its HTML into heading
// and paragraph blocks.
//
// How extraction works:
//   The body is parsed with the `scraper` crate and the selector
//   `h1, h2, h3, p` is walked in document order. For each match
//   we take all descendant text, trim it, and record it as a
//   Heading (h1–h3) or a Paragraph (p).
//
// Failure policy:
//   One URL failing (timeout, DNS, refused connection, non-2xx
//   status, unreadable body) is logged and skipped. It never
//   aborts the run, and there is no retry or backoff.

use anyhow::{anyhow, Context, Result};
use scraper::{Html, Selector};
use std::time::Duration;

use crate::domain::document::{Block, ScrapedPage};
use crate::domain::traits::PageFetcher;

/// Elements extracted from every page, in document order
const CONTENT_SELECTOR: &str = "h1, h2, h3, p";

// ─── HttpFetcher ──────────────────────────────────────────────────────────────
/// Blocking HTTP GET with a bounded timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("agile-qa/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Cannot build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;

        response
            .text()
            .with_context(|| format!("Cannot read body of {url}"))
    }
}

// ─── Scrape outcome ───────────────────────────────────────────────────────────
/// A URL that could not be scraped, with the reason.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub url:    String,
    pub reason: String,
}

/// Everything one scrape run produced.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Successfully scraped pages, in the order the URLs were given
    pub pages: Vec<ScrapedPage>,

    /// URLs that were skipped
    pub failures: Vec<FetchFailure>,
}

impl ScrapeOutcome {
    /// Flatten all pages into one structured document buffer.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        for page in &self.pages {
            page.render_into(&mut buffer);
        }
        buffer
    }
}

/// Fetch every URL in order, skipping the ones that fail.
pub fn scrape_all<F: PageFetcher>(fetcher: &F, urls: &[String]) -> ScrapeOutcome {
    let mut outcome = ScrapeOutcome::default();

    for url in urls {
        tracing::info!("Scraping {}...", url);

        match fetcher.fetch(url).and_then(|body| extract_blocks(&body)) {
            Ok(blocks) => {
                tracing::debug!("{}: {} blocks extracted", url, blocks.len());
                outcome.pages.push(ScrapedPage::new(url.clone(), blocks));
            }
            // One bad URL never stops the run
            Err(e) => {
                tracing::warn!("Failed to scrape {}: {:#}", url, e);
                outcome.failures.push(FetchFailure {
                    url:    url.clone(),
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    outcome
}

/// Extract heading and paragraph blocks from an HTML document.
pub fn extract_blocks(html: &str) -> Result<Vec<Block>> {
    let selector = Selector::parse(CONTENT_SELECTOR)
        .map_err(|e| anyhow!("Invalid selector '{CONTENT_SELECTOR}': {e}"))?;

    let document = Html::parse_document(html);

    let blocks = document
        .select(&selector)
        .map(|element| {
            let text = element.text().collect::<String>().trim().to_string();
            match element.value().name() {
                "p" => Block::Paragraph(text),
                _   => Block::Heading(text),
            }
        })
        .collect();

    Ok(blocks)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const PAGE: &str = "<html><body>\
        <h1> Agile </h1>\
        <p>Individuals and <b>interactions</b>.</p>\
        <p>   </p>\
        <h3>Scrum</h3>\
        <div><p>Sprints are time-boxed.</p></div>\
        </body></html>";

    /// Serve one canned HTTP response on a random local port.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{addr}/")
    }

    /// A URL on a port nothing is listening on.
    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    #[test]
    fn test_extract_blocks_in_document_order() {
        let blocks = extract_blocks(PAGE).unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Agile".into()),
                Block::Paragraph("Individuals and interactions.".into()),
                Block::Paragraph(String::new()),
                Block::Heading("Scrum".into()),
                Block::Paragraph("Sprints are time-boxed.".into()),
            ]
        );
    }

    #[test]
    fn test_unreachable_url_is_skipped() {
        let good = serve_once("200 OK", PAGE);
        let bad  = closed_port_url();

        let fetcher = HttpFetcher::new(Duration::from_secs(10)).unwrap();
        let outcome = scrape_all(&fetcher, &[bad.clone(), good.clone()]);

        assert_eq!(outcome.pages.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].url, bad);

        let buffer = outcome.render();
        assert!(buffer.contains(&format!("### Content from {good} ###")));
        assert!(!buffer.contains(&bad));
        assert!(buffer.contains("\n\n**Agile**\n\n"));
        assert!(buffer.contains("Sprints are time-boxed.\n\n"));
    }

    #[test]
    fn test_error_status_is_a_failure() {
        let missing = serve_once("404 Not Found", "<p>gone</p>");

        let fetcher = HttpFetcher::new(Duration::from_secs(10)).unwrap();
        let outcome = scrape_all(&fetcher, &[missing]);

        assert!(outcome.pages.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.render(), "");
    }
}
