//! Mobile (secondary) listing API client and normalizer

use crate::analysis::AREA_UNIT;
use crate::error::{FetchError, Result};
use crate::models::Article;
use serde::Deserialize;
use std::time::Duration;

const MOBILE_BASE_URL: &str = "https://m.land.naver.com";

const ACCEPT: &str = "application/json, text/plain, */*";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// One article in the mobile API's shape; transient, converted to
/// [`Article`] before leaving the fetch.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MobileArticle {
    #[serde(default)]
    pub atcl_no: Option<String>,
    #[serde(default)]
    pub atcl_nm: Option<String>,
    #[serde(default)]
    pub bild_nm: Option<String>,
    #[serde(default)]
    pub trad_tp_nm: Option<String>,
    #[serde(default)]
    pub flr_info: Option<String>,
    #[serde(default)]
    pub prc_info: Option<String>,
    /// Exclusive area in square meters, without unit suffix
    #[serde(default)]
    pub spc1: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub cfm_ymd: Option<String>,
    #[serde(default)]
    pub atcl_fetr_desc: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub rlet_tp_nm: Option<String>,
    #[serde(default)]
    pub rltr_nm: Option<String>,
}

/// Mobile response envelope: `{ "result": { "list": [...] } }`
#[derive(Debug, Deserialize, Default)]
struct ArticleListBody {
    #[serde(default)]
    result: Option<ArticleListResult>,
}

#[derive(Debug, Deserialize, Default)]
struct ArticleListResult {
    #[serde(default)]
    list: Option<Vec<MobileArticle>>,
}

/// Convert a mobile API article to the canonical (desktop) shape.
///
/// Missing source fields stay `None`. The same-address price-range fields
/// have no mobile equivalent and are always left unset.
pub fn normalize_mobile_article(article: MobileArticle) -> Article {
    Article {
        article_no: article.atcl_no,
        article_name: article.atcl_nm,
        building_name: article.bild_nm,
        trade_type_name: article.trad_tp_nm,
        floor_info: article.flr_info,
        deal_or_warrant_prc: article.prc_info,
        area_name: article.spc1.map(|spc| format!("{spc}{AREA_UNIT}")),
        direction: article.direction,
        article_confirm_ymd: article.cfm_ymd,
        article_feature_desc: article.atcl_fetr_desc,
        tag_list: article.tag_list,
        real_estate_type_name: article.rlet_tp_nm,
        same_addr_max_prc: None,
        same_addr_min_prc: None,
        realtor_name: article.rltr_nm,
    }
}

/// Client for the mobile listing endpoint.
pub struct MobileClient {
    client: reqwest::Client,
    base_url: String,
}

impl MobileClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(MOBILE_BASE_URL)
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

    /// Fetch a single page of mobile articles. An absent or null
    /// `result.list` counts as an empty page.
    pub async fn fetch_page(
        &self,
        complex_no: &str,
        trade_type: &str,
        page: u32,
    ) -> Result<Vec<MobileArticle>> {
        let url = format!("{}/complex/getComplexArticleList", self.base_url);
        let page = page.to_string();

        log::debug!("GET {} hscpNo={} page={}", url, complex_no, page);

        let response = self
            .client
            .get(&url)
            .header("accept", ACCEPT)
            .header("referer", format!("{}/", MOBILE_BASE_URL))
            .header("user-agent", USER_AGENT)
            .query(&[
                ("hscpNo", complex_no),
                ("tradTpCd", trade_type),
                ("order", "prc"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let text = response.text().await?;
        let body: ArticleListBody = serde_json::from_str(&text)?;

        Ok(body.result.and_then(|r| r.list).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "mobile_tests.rs"]
mod tests;
