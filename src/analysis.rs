//! Listing deduplication, area bucketing, and price analysis
//!
//! The pipeline after fetching: dedupe raw articles, annotate each one with a
//! parsed price and an integer area bucket, then compute per-bucket means and
//! bargain candidates. Rows whose price or area cannot be parsed are dropped
//! and counted, never propagated as errors.

use crate::models::{AreaStat, Article, Bargain, ParsedArticle};
use crate::price::parse_price;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Area unit suffix used in provider labels and bucket names
pub const AREA_UNIT: &str = "㎡";

/// Default bargain threshold: flag listings below 95% of the bucket mean
pub const DEFAULT_BARGAIN_THRESHOLD: f64 = 0.95;

lazy_static! {
    static ref AREA_NUMERAL: Regex = Regex::new(r"\d+\.?\d*").unwrap();
}

/// Articles that survived price and area parsing, plus the drop count
#[derive(Debug, Default)]
pub struct AnnotatedArticles {
    pub listings: Vec<ParsedArticle>,
    pub parse_failures: usize,
}

/// Derive the integer area bucket from a raw area label.
///
/// Takes the first decimal numeral in the label and truncates it toward zero:
/// "84.95㎡" becomes "84㎡". Returns `None` when the label has no numeral.
pub fn area_group(area_name: &str) -> Option<String> {
    let numeral = AREA_NUMERAL.find(area_name)?;
    let value: f64 = numeral.as_str().parse().ok()?;
    Some(format!("{}{}", value.trunc() as i64, AREA_UNIT))
}

/// Remove duplicate articles, keeping the first occurrence per composite key.
///
/// Key: (buildingName, floorInfo, areaName, dealOrWarrantPrc, direction).
/// Input order is otherwise preserved.
pub fn dedupe_articles(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(articles.len());

    for article in articles {
        let key = (
            article.building_name.clone(),
            article.floor_info.clone(),
            article.area_name.clone(),
            article.deal_or_warrant_prc.clone(),
            article.direction.clone(),
        );
        if seen.insert(key) {
            unique.push(article);
        }
    }

    unique
}

/// Dedupe articles and annotate each with a parsed price and area bucket.
///
/// A record failing either parse is dropped and counted; the pipeline
/// continues with whatever survived.
pub fn annotate_articles(articles: Vec<Article>) -> AnnotatedArticles {
    let deduped = dedupe_articles(articles);
    let mut listings = Vec::with_capacity(deduped.len());
    let mut parse_failures = 0;

    for article in deduped {
        let price = article.deal_or_warrant_prc.as_deref().and_then(parse_price);
        let group = article.area_name.as_deref().and_then(area_group);
        match (price, group) {
            (Some(price_value), Some(area_group)) => listings.push(ParsedArticle {
                article,
                price_value,
                area_group,
            }),
            _ => parse_failures += 1,
        }
    }

    if parse_failures > 0 {
        log::debug!(
            "Dropped {} article(s) with unparseable price or area",
            parse_failures
        );
    }

    AnnotatedArticles {
        listings,
        parse_failures,
    }
}

/// Numeric magnitude of a bucket label, for sorting ("9㎡" before "59㎡")
fn area_sort_key(group: &str) -> i64 {
    let digits: String = group.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Running (sum, count) accumulator per area bucket
fn accumulate_by_group(listings: &[ParsedArticle]) -> HashMap<&str, (i64, usize)> {
    let mut groups: HashMap<&str, (i64, usize)> = HashMap::new();
    for listing in listings {
        let entry = groups.entry(listing.area_group.as_str()).or_insert((0, 0));
        entry.0 += listing.price_value;
        entry.1 += 1;
    }
    groups
}

/// Compute mean price and listing count per area bucket, sorted ascending by
/// the numeric bucket magnitude.
pub fn compute_area_stats(listings: &[ParsedArticle]) -> Vec<AreaStat> {
    let mut stats: Vec<AreaStat> = accumulate_by_group(listings)
        .into_iter()
        .map(|(group, (sum, count))| AreaStat {
            area_group: group.to_string(),
            mean_price: sum as f64 / count as f64,
            count,
        })
        .collect();

    stats.sort_by_key(|stat| area_sort_key(&stat.area_group));
    stats
}

/// Find listings priced below `threshold` times their area bucket's mean.
///
/// Each kept listing is annotated with the bucket mean and the discount
/// percentage. Empty input yields an empty result.
pub fn find_bargains(listings: &[ParsedArticle], threshold: f64) -> Vec<Bargain> {
    let groups = accumulate_by_group(listings);
    let mut bargains = Vec::new();

    for listing in listings {
        let (sum, count) = groups[listing.area_group.as_str()];
        let mean = sum as f64 / count as f64;
        if (listing.price_value as f64) < mean * threshold {
            bargains.push(Bargain {
                listing: listing.clone(),
                area_mean_price: mean,
                discount_pct: (1.0 - listing.price_value as f64 / mean) * 100.0,
            });
        }
    }

    bargains
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
