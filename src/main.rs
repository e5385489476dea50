//! Apartment Watch - Naver listing collector and price analyzer
//!
//! Fetches apartment sale listings with desktop-to-mobile API fallback,
//! deduplicates and buckets them by exclusive area, and serves search,
//! listing, and analysis endpoints over HTTP.

use apt_watch::analysis::{
    annotate_articles, compute_area_stats, find_bargains, DEFAULT_BARGAIN_THRESHOLD,
};
use apt_watch::complex_map::ComplexMap;
use apt_watch::naver::fetch_articles_with_fallback;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Apartment listing server - fetches Naver listings and serves price analysis
#[derive(Parser, Debug)]
#[command(name = "apt_watch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the complex name -> identifier JSON file
    #[arg(short, long, default_value_t = default_complex_map_path())]
    complex_map: String,

    /// Port for the HTTP API
    #[arg(short, long, default_value_t = 5001)]
    port: u16,

    /// Analyze a single complex number, print JSON to stdout, and exit
    #[arg(long)]
    once: Option<String>,

    /// Trade type code for fetches (A1 = sale)
    #[arg(long, default_value = "A1")]
    trade_type: String,
}

/// Returns the default complex map path: ~/.local/share/apt_watch/complex_map.json
fn default_complex_map_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("apt_watch")
        .join("complex_map.json")
        .to_string_lossy()
        .to_string()
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting apt_watch...");
    log::info!("Complex map path: {}", args.complex_map);

    let complexes = Arc::new(ComplexMap::load(&args.complex_map));

    if let Some(complex_no) = args.once {
        run_once(&complex_no, &args.trade_type).await;
        return;
    }

    if let Err(e) = apt_watch::web::serve(complexes, args.port).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}

/// Analyze a single complex and print the result as pretty JSON
async fn run_once(complex_no: &str, trade_type: &str) {
    let articles = fetch_articles_with_fallback(complex_no, trade_type).await;
    log::info!("Fetched {} article(s) for complex {}", articles.len(), complex_no);

    let annotated = annotate_articles(articles);
    let area_stats = compute_area_stats(&annotated.listings);
    let bargains = find_bargains(&annotated.listings, DEFAULT_BARGAIN_THRESHOLD);

    let output = serde_json::json!({
        "allSales": annotated.listings,
        "areaStats": area_stats,
        "bargains": bargains,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize analysis: {}", e),
    }
}
