//! Desktop (primary) listing API client

use crate::error::{FetchError, Result};
use crate::models::Article;
use serde::Deserialize;
use std::time::Duration;

const PC_BASE_URL: &str = "https://new.land.naver.com";

// Guest headers; no session token required, which keeps the client usable
// from a server environment.
const ACCEPT: &str = "application/json, text/plain, */*";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// One page of the desktop article list
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ArticleListPage {
    #[serde(default)]
    article_list: Vec<Article>,
}

/// Client for the desktop listing endpoint.
///
/// Holds one `reqwest::Client` so connections are reused across the pages of
/// a single fetch; dropped when the fetch ends.
pub struct PcClient {
    client: reqwest::Client,
    base_url: String,
}

impl PcClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(PC_BASE_URL)
    }

    /// Build a client against the given base URL (for testing with mock servers).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a single page of articles. An empty page signals the end of
    /// pagination.
    pub async fn fetch_page(
        &self,
        complex_no: &str,
        trade_type: &str,
        page: u32,
    ) -> Result<Vec<Article>> {
        let url = format!("{}/api/articles/complex/{}", self.base_url, complex_no);
        let referer = format!("{}/complexes/{}", self.base_url, complex_no);
        let page = page.to_string();

        log::debug!("GET {} page={}", url, page);

        let response = self
            .client
            .get(&url)
            .header("accept", ACCEPT)
            .header("origin", PC_BASE_URL)
            .header("referer", &referer)
            .header("user-agent", USER_AGENT)
            .query(&[
                ("realEstateType", "APT:ABYG:JGC:PRE"),
                ("tradeType", trade_type),
                ("priceMin", "0"),
                ("priceMax", "900000000"),
                ("areaMin", "0"),
                ("areaMax", "900000000"),
                ("priceType", "RETAIL"),
                ("page", page.as_str()),
                ("type", "list"),
                ("order", "prc"),
                ("sameAddressGroup", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body: ArticleListPage = response.json().await?;
        Ok(body.article_list)
    }
}

#[cfg(test)]
#[path = "pc_tests.rs"]
mod tests;
