//! Integration tests against a mock Discogs server
//!
//! Covers the full path: client → HTTP → envelope deserialization →
//! pagination stream, in both consumption modes.

use discogs_client::{Credentials, DiscogsClient, Error, SearchQuery, SearchType, Sort, SortField};
use futures::StreamExt;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DiscogsClient {
    DiscogsClient::builder()
        .base_url(server.uri())
        .user_agent("discogs-client-tests/1.0")
        .build()
        .unwrap()
}

/// Body for one page of master versions with `per_page` items, ids
/// numbered absolutely so ordering checks are trivial.
fn versions_page(page: u64, pages: u64, per_page: u64, total: u64) -> Value {
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    let versions: Vec<Value> = (start..end)
        .map(|i| json!({"id": i, "title": format!("Version {i}")}))
        .collect();

    json!({
        "pagination": {"page": page, "pages": pages, "per_page": per_page, "items": total},
        "versions": versions
    })
}

// ============================================================================
// Single-entity getters
// ============================================================================

#[tokio::test]
async fn test_get_release() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/249504"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 249504,
            "title": "Never Gonna Give You Up",
            "year": 1987,
            "artists": [{"id": 72872, "name": "Rick Astley"}]
        })))
        .mount(&server)
        .await;

    let release = client_for(&server).get_release(249504).await.unwrap();
    assert_eq!(release.title, "Never Gonna Give You Up");
    assert_eq!(release.year, Some(1987));
    assert_eq!(release.artists[0].name, "Rick Astley");
}

#[tokio::test]
async fn test_get_master_and_artist_and_label() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/masters/96559"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 96559, "title": "Some Master", "main_release": 249504}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artists/72872"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 72872, "name": "Rick Astley"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/labels/895"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 895, "name": "RCA"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.get_master(96559).await.unwrap().main_release,
        Some(249504)
    );
    assert_eq!(client.get_artist(72872).await.unwrap().name, "Rick Astley");
    assert_eq!(client.get_label(895).await.unwrap().name, "RCA");
}

#[tokio::test]
async fn test_entity_not_found_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Release not found."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_release(1).await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Release not found"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_token_credentials_and_user_agent_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/249504"))
        .and(header("Authorization", "Discogs token=sekret"))
        .and(header("User-Agent", "discogs-client-tests/1.0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 249504, "title": "ok"})),
        )
        .mount(&server)
        .await;

    let client = DiscogsClient::builder()
        .base_url(server.uri())
        .user_agent("discogs-client-tests/1.0")
        .credentials(Credentials::token("sekret"))
        .build()
        .unwrap();

    // An unmatched request would 404 here.
    client.get_release(249504).await.unwrap();
}

// ============================================================================
// Paginated listings, pull mode
// ============================================================================

#[tokio::test]
async fn test_master_versions_spans_pages_in_order() {
    let server = MockServer::start().await;

    for page in 1..=3u64 {
        Mock::given(method("GET"))
            .and(path("/masters/96559/versions"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(versions_page(page, 3, 50, 130)),
            )
            .mount(&server)
            .await;
    }

    let mut stream = client_for(&server).master_versions(96559).stream();
    let mut ids = Vec::new();
    while let Some(version) = stream.next().await {
        ids.push(version.unwrap().id);
    }

    assert_eq!(ids, (0..130).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_master_versions_cap_truncates_final_page() {
    let server = MockServer::start().await;

    for page in 1..=3u64 {
        Mock::given(method("GET"))
            .and(path("/masters/96559/versions"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(versions_page(page, 3, 50, 150)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let versions = client_for(&server)
        .master_versions(96559)
        .max(120)
        .collect()
        .await
        .unwrap();

    assert_eq!(versions.len(), 120);
    assert_eq!(versions.last().unwrap().id, 119);
    // The .expect(1) per page verifies exactly pages 1-3 were hit.
    server.verify().await;
}

#[tokio::test]
async fn test_cap_zero_never_touches_the_server() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would fail the collect.

    let versions = client_for(&server)
        .master_versions(96559)
        .max(0)
        .collect()
        .await
        .unwrap();

    assert!(versions.is_empty());
}

#[tokio::test]
async fn test_failure_on_second_page_after_first_was_delivered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels/895/releases"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"page": 1, "pages": 2, "per_page": 2, "items": 4},
            "releases": [
                {"id": 1, "title": "One"},
                {"id": 2, "title": "Two"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/labels/895/releases"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut stream = client_for(&server).label_releases(895).stream();

    assert_eq!(stream.next().await.unwrap().unwrap().id, 1);
    assert_eq!(stream.next().await.unwrap().unwrap().id, 2);
    assert!(matches!(
        stream.next().await.unwrap().unwrap_err(),
        Error::HttpStatus { status: 503, .. }
    ));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_artist_releases_sends_sort_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/72872/releases"))
        .and(query_param("sort", "year"))
        .and(query_param("sort_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 1},
            "releases": [{"id": 7, "title": "Whenever You Need Somebody", "year": 1987}]
        })))
        .mount(&server)
        .await;

    let releases = client_for(&server)
        .artist_releases(72872, Some(Sort::descending(SortField::Year)))
        .collect()
        .await
        .unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].year, Some(1987));
}

#[tokio::test]
async fn test_search_sends_criteria_and_pagination_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(query_param("artist", "nirvana"))
        .and(query_param("type", "release"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 1},
            "results": [{"id": 42, "title": "Nirvana - Nevermind", "type": "release", "year": "1991"}]
        })))
        .mount(&server)
        .await;

    let query = SearchQuery::new()
        .artist("nirvana")
        .search_type(SearchType::Release);
    let results = client_for(&server).search(&query).collect().await.unwrap();

    assert_eq!(results[0].id, 42);
    assert_eq!(results[0].year.as_deref(), Some("1991"));
}

// ============================================================================
// Push mode end to end
// ============================================================================

struct Collecting {
    items: Arc<Mutex<Vec<u64>>>,
    terminals: Arc<Mutex<Vec<String>>>,
}

impl discogs_client::Subscriber<discogs_client::data::ReleaseVersion> for Collecting {
    fn on_item(&mut self, item: discogs_client::data::ReleaseVersion) {
        self.items.lock().unwrap().push(item.id);
    }

    fn on_error(&mut self, error: Error) {
        self.terminals.lock().unwrap().push(format!("error: {error}"));
    }

    fn on_complete(&mut self) {
        self.terminals.lock().unwrap().push("complete".to_string());
    }
}

#[tokio::test]
async fn test_subscribe_end_to_end() {
    let server = MockServer::start().await;

    for page in 1..=2u64 {
        Mock::given(method("GET"))
            .and(path("/masters/96559/versions"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(versions_page(page, 2, 50, 80)),
            )
            .mount(&server)
            .await;
    }

    let items = Arc::new(Mutex::new(Vec::new()));
    let terminals = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Collecting {
        items: items.clone(),
        terminals: terminals.clone(),
    };

    let subscription = client_for(&server)
        .master_versions(96559)
        .subscribe(subscriber);
    subscription.join().await;

    assert_eq!(*items.lock().unwrap(), (0..80).collect::<Vec<u64>>());
    assert_eq!(*terminals.lock().unwrap(), vec!["complete".to_string()]);
}
