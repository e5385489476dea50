//! Tests for the desktop listing API client.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::FetchError;

/// Builds a desktop list page body with the given articles.
fn article_list_json(articles: &[(&str, &str, &str)]) -> serde_json::Value {
    let list: Vec<serde_json::Value> = articles
        .iter()
        .map(|(no, price, area)| {
            serde_json::json!({
                "articleNo": no,
                "articleName": "래미안원베일리",
                "buildingName": "101동",
                "tradeTypeName": "매매",
                "floorInfo": "10/15",
                "dealOrWarrantPrc": price,
                "areaName": area,
                "direction": "남향",
                "articleConfirmYmd": "20260801",
                "tagList": ["역세권", "대단지"],
                "realEstateTypeName": "아파트",
                "realtorName": "공인중개사"
            })
        })
        .collect();

    serde_json::json!({ "articleList": list })
}

#[tokio::test]
async fn fetch_page_deserializes_articles() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles/complex/111515"))
        .and(query_param("tradeType", "A1"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(article_list_json(&[("A-1", "16억 5,000", "84.95㎡")])),
        )
        .mount(&mock_server)
        .await;

    let client = PcClient::with_base_url(&mock_server.uri()).unwrap();
    let articles = client.fetch_page("111515", "A1", 1).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article_no.as_deref(), Some("A-1"));
    assert_eq!(articles[0].deal_or_warrant_prc.as_deref(), Some("16억 5,000"));
    assert_eq!(articles[0].area_name.as_deref(), Some("84.95㎡"));
    assert_eq!(articles[0].tag_list, vec!["역세권", "대단지"]);
}

#[tokio::test]
async fn fetch_page_with_missing_article_list_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = PcClient::with_base_url(&mock_server.uri()).unwrap();
    let articles = client.fetch_page("111515", "A1", 1).await.unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn fetch_page_tolerates_unknown_and_missing_fields() {
    let mock_server = MockServer::start().await;

    // Only a subset of the canonical fields, plus one the client never asked for
    let body = serde_json::json!({
        "articleList": [{
            "articleNo": "A-9",
            "dealOrWarrantPrc": "9억",
            "someFutureField": true
        }]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = PcClient::with_base_url(&mock_server.uri()).unwrap();
    let articles = client.fetch_page("111515", "A1", 1).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article_no.as_deref(), Some("A-9"));
    assert!(articles[0].building_name.is_none());
    assert!(articles[0].tag_list.is_empty());
}

#[tokio::test]
async fn fetch_page_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = PcClient::with_base_url(&mock_server.uri()).unwrap();
    match client.fetch_page("111515", "A1", 1).await {
        Err(FetchError::HttpStatus(status)) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("Expected FetchError::HttpStatus(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_page_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = PcClient::with_base_url(&mock_server.uri()).unwrap();
    match client.fetch_page("111515", "A1", 1).await {
        Err(FetchError::HttpStatus(status)) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("Expected FetchError::HttpStatus(500), got: {other:?}"),
    }
}
