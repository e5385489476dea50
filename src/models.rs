use serde::{Deserialize, Serialize};

/// A listing in the canonical (desktop API) shape.
///
/// Desktop API articles deserialize into this directly; mobile API articles
/// are converted via [`crate::naver::normalize_mobile_article`]. Every field
/// the upstream may omit is optional so a sparse record never fails to
/// deserialize.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Provider-assigned unique identifier
    #[serde(default)]
    pub article_no: Option<String>,
    #[serde(default)]
    pub article_name: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub trade_type_name: Option<String>,
    #[serde(default)]
    pub floor_info: Option<String>,
    /// Raw price string, e.g. "16억 5,000"
    #[serde(default)]
    pub deal_or_warrant_prc: Option<String>,
    /// Raw area label, e.g. "84.95㎡"
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub article_confirm_ymd: Option<String>,
    #[serde(default)]
    pub article_feature_desc: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub real_estate_type_name: Option<String>,
    /// Desktop API only; None when normalized from the mobile API
    #[serde(default)]
    pub same_addr_max_prc: Option<String>,
    /// Desktop API only; None when normalized from the mobile API
    #[serde(default)]
    pub same_addr_min_prc: Option<String>,
    #[serde(default)]
    pub realtor_name: Option<String>,
}

/// An [`Article`] whose price and area both parsed successfully
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArticle {
    #[serde(flatten)]
    pub article: Article,
    /// Price in ten-thousand-won units
    pub price_value: i64,
    /// Integer-truncated area bucket, e.g. "84㎡"
    pub area_group: String,
}

/// Per-area-bucket price statistics
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AreaStat {
    pub area_group: String,
    pub mean_price: f64,
    pub count: usize,
}

/// A listing priced below its area bucket's mean
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bargain {
    #[serde(flatten)]
    pub listing: ParsedArticle,
    pub area_mean_price: f64,
    pub discount_pct: f64,
}
