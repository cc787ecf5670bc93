/// Async HTTP client for the remote catalog
///
/// One GET per page; decoding is delegated to `wire`.

use crate::config::Config;
use crate::error::FetchError;
use crate::state::data::Batch;

use super::wire;

/// Sent with every request; the public catalog asks clients to identify themselves
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the paginated artworks endpoint
///
/// Cheap to clone (the inner `reqwest::Client` is reference counted), so
/// each page fetch task gets its own copy.
#[derive(Debug, Clone)]
pub struct ArticClient {
    http: reqwest::Client,
    api_url: String,
    rows_per_page: usize,
}

impl ArticClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            rows_per_page: config.rows_per_page,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch one 1-based page of the catalog.
    ///
    /// No retry and no timeout: a failure is reported once and the caller
    /// keeps whatever it was showing.
    pub async fn fetch_page(&self, page: u32) -> Result<Batch, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("page", page as usize), ("limit", self.rows_per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        wire::decode_page(&body)
    }
}
