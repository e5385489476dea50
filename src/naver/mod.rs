//! Listing acquisition with primary/secondary source fallback
//!
//! The desktop API is the primary source; the mobile API covers for it when
//! it fails or returns nothing. Acquisition is fail-soft: every failure path
//! ends in an empty list, never an error surfaced to the caller.

mod mobile;
mod pc;

pub use mobile::{normalize_mobile_article, MobileArticle, MobileClient};
pub use pc::PcClient;

use crate::models::Article;

/// Hard cap on pages fetched per source, as a runaway guard
const MAX_PAGES: u32 = 100;

/// Fetch every page from the desktop API, starting at page 1.
///
/// Pagination ends on the first empty page. Any page error aborts the whole
/// fetch; partial accumulations are discarded with it.
async fn fetch_all_primary(
    client: &PcClient,
    complex_no: &str,
    trade_type: &str,
) -> crate::error::Result<Vec<Article>> {
    let mut articles = Vec::new();

    for page in 1..=MAX_PAGES {
        let batch = client.fetch_page(complex_no, trade_type, page).await?;
        if batch.is_empty() {
            break;
        }
        articles.extend(batch);
    }

    Ok(articles)
}

/// Fetch every page from the mobile API, normalizing each record to the
/// canonical shape. Same pagination and all-or-nothing error behavior as the
/// primary fetch.
async fn fetch_all_secondary(
    client: &MobileClient,
    complex_no: &str,
    trade_type: &str,
) -> crate::error::Result<Vec<Article>> {
    let mut articles = Vec::new();

    for page in 1..=MAX_PAGES {
        let batch = client.fetch_page(complex_no, trade_type, page).await?;
        if batch.is_empty() {
            break;
        }
        articles.extend(batch.into_iter().map(normalize_mobile_article));
    }

    Ok(articles)
}

/// Fetch articles for a complex, falling back from the desktop API to the
/// mobile API.
///
/// The secondary source is consulted when the primary errors or comes back
/// empty. When both sources fail the result is an empty list.
pub(crate) async fn fetch_all(
    pc: &PcClient,
    mobile: &MobileClient,
    complex_no: &str,
    trade_type: &str,
) -> Vec<Article> {
    match fetch_all_primary(pc, complex_no, trade_type).await {
        Ok(articles) if !articles.is_empty() => {
            log::info!(
                "Fetched {} article(s) for complex {} from the desktop API",
                articles.len(),
                complex_no
            );
            return articles;
        }
        Ok(_) => {
            log::info!(
                "Desktop API returned no articles for complex {}, trying mobile",
                complex_no
            );
        }
        Err(e) => {
            log::warn!(
                "Desktop API fetch failed for complex {}: {}, trying mobile",
                complex_no,
                e
            );
        }
    }

    match fetch_all_secondary(mobile, complex_no, trade_type).await {
        Ok(articles) => {
            log::info!(
                "Fetched {} article(s) for complex {} from the mobile API",
                articles.len(),
                complex_no
            );
            articles
        }
        Err(e) => {
            log::warn!(
                "Mobile API fetch failed for complex {}: {}, returning no articles",
                complex_no,
                e
            );
            Vec::new()
        }
    }
}

/// Fetch all listings for a complex with fallback, building fresh clients for
/// the duration of the call. Returns an empty list on any failure, including
/// client construction.
pub async fn fetch_articles_with_fallback(complex_no: &str, trade_type: &str) -> Vec<Article> {
    let (pc, mobile) = match (PcClient::new(), MobileClient::new()) {
        (Ok(pc), Ok(mobile)) => (pc, mobile),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to build HTTP client: {}", e);
            return Vec::new();
        }
    };

    fetch_all(&pc, &mobile, complex_no, trade_type).await
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
