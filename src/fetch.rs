use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};

/// Anything that can hand over the raw HTML of a ceremony page.
pub trait PageSource {
    fn fetch(&self, year: i32) -> Result<String>;
}

/// Fetches `{base_url}/{year}` over HTTP, one blocking GET per call.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| ScrapeError::Fetch {
                url: base_url.to_string(),
                source,
            })?;
        Ok(HttpFetcher {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, year: i32) -> String {
        format!("{}/{}", self.base_url, year)
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, year: i32) -> Result<String> {
        let url = self.url_for(year);
        let fetch_err = |source| ScrapeError::Fetch {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().map_err(fetch_err)?;
        let status = response.status();
        // Non-success bodies are still handed to the parser, which rejects
        // them if the page structure doesn't match.
        if !status.is_success() {
            warn!(%url, %status, "non-success response");
        }
        let body = response.text().map_err(fetch_err)?;
        debug!(%url, %status, bytes = body.len(), "fetched ceremony page");
        Ok(body)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_has_year_segment() {
        let f = HttpFetcher::new("https://www.oscars.org/oscars/ceremonies").unwrap();
        assert_eq!(
            f.url_for(1929),
            "https://www.oscars.org/oscars/ceremonies/1929"
        );
    }

    #[test]
    fn trailing_slash_not_doubled() {
        let f = HttpFetcher::new("http://localhost:8080/ceremonies/").unwrap();
        assert_eq!(f.url_for(2022), "http://localhost:8080/ceremonies/2022");
    }
}
