//! Paginated dataset fetching.
//!
//! The dashboard API serves large datasets in pages. This module requests
//! pages sequentially starting at page 1, treats HTTP 204 as the
//! end-of-pagination signal, and concatenates the CSV page bodies into one
//! string. Every page repeats the CSV column header, so the first line is
//! stripped from every page after the first before concatenation.
//!
//! Requests are issued one at a time on the calling task; the only state is
//! the page counter and the accumulated page list, both local to
//! [`DatasetFetcher::fetch`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::query::{FilterSet, Structure};
use reqwest::StatusCode;
use tracing::{debug, info};
use url::Url;

/// Fetches paginated CSV datasets from the dashboard API
///
/// Holds a configured HTTP client and the endpoint URL. One instance can be
/// reused across fetches; each fetch is an independent pagination loop.
pub struct DatasetFetcher {
    /// HTTP client with the configured timeout and user agent
    http_client: reqwest::Client,

    /// Validated dataset endpoint
    endpoint: Url,
}

impl DatasetFetcher {
    /// Create a new fetcher from the given configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the endpoint is not a valid URL, or
    /// [`Error::Network`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| Error::Config {
            message: format!("endpoint is not a valid URL: {}", e),
            key: Some("endpoint".to_string()),
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Fetch the complete dataset for the given filters and structure
    ///
    /// Issues sequential page requests until the API signals the end of the
    /// data with a 204 response, then returns the pages joined with newlines.
    /// The repeated CSV header is removed from every page after the first,
    /// and each page is trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`Error::RequestFailed`] as soon as any page request comes
    /// back with a status of 400 or above, carrying the response body as the
    /// failure detail. Transport failures (connection errors, timeouts)
    /// surface as [`Error::Network`]. Either way the whole fetch aborts with
    /// no partial result.
    pub async fn fetch(&self, filters: &FilterSet, structure: &Structure) -> Result<String> {
        let filters_param = filters.joined();
        let structure_param = structure.to_compact_json()?;

        let mut pages: Vec<String> = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            debug!(page = page_number, "requesting dataset page");

            let response = self
                .http_client
                .get(self.endpoint.clone())
                .query(&[
                    ("filters", filters_param.as_str()),
                    ("structure", structure_param.as_str()),
                    ("format", "csv"),
                    ("page", page_number.to_string().as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if status.as_u16() >= 400 {
                let body = response.text().await?;
                return Err(Error::RequestFailed {
                    status: status.as_u16(),
                    body,
                });
            }

            // 204 is the end-of-pagination signal.
            if status == StatusCode::NO_CONTENT {
                break;
            }

            let body = response.text().await?;

            // Every page repeats the column header; keep it on the first
            // page only.
            let content = if page_number > 1 {
                match body.split_once('\n') {
                    Some((_, rest)) => rest.to_string(),
                    None => String::new(),
                }
            } else {
                body
            };

            pages.push(content.trim().to_string());
            page_number += 1;
        }

        let dataset = pages.join("\n");
        info!(
            pages = pages.len(),
            bytes = dataset.len(),
            "dataset fetch complete"
        );
        Ok(dataset)
    }
}
