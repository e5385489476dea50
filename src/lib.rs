//! Apartment Watch - Naver listing collector and price analyzer
//!
//! This crate fetches apartment sale listings from Naver's desktop and mobile
//! APIs with fallback, normalizes and deduplicates them, and computes
//! per-area price statistics and bargain candidates.

pub mod analysis;
pub mod complex_map;
pub mod error;
pub mod models;
pub mod naver;
pub mod price;
pub mod web;

pub use analysis::{annotate_articles, compute_area_stats, find_bargains};
pub use complex_map::{ComplexEntry, ComplexMap};
pub use error::{FetchError, Result};
pub use models::{AreaStat, Article, Bargain, ParsedArticle};
pub use naver::fetch_articles_with_fallback;
pub use price::parse_price;
