//! End-to-end session tests: bootstrap wiring, the HTTP page source and the
//! store against a local mock directory.

use std::collections::HashSet;
use std::io::Write;

use be_app::{Backfill, WindowAdvance};
use be_core::BreweryId;
use brewery_explorer::bootstrap::{build_store, load_config};
use mockito::{Matcher, Mock, Server, ServerGuard};
use tempfile::NamedTempFile;

fn page_body(prefix: &str, n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":"{prefix}-{i}","name":"Brewery {i}","brewery_type":"micro","city":"Austin","state":"Texas"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

async fn mock_page(server: &mut ServerGuard, page: u32, body: String) -> Mock {
    server
        .mock("GET", "/v1/breweries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".into(), "15".into()),
            Matcher::UrlEncoded("page".into(), page.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn config_file(base_url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
            [source]
            base_url = "{base_url}"
            retry_attempts = 0
            request_timeout_ms = 2000
        "#
    )
    .unwrap();
    file
}

#[tokio::test]
async fn test_session_loads_scrolls_and_backfills_over_http() {
    let mut server = Server::new_async().await;
    let first = mock_page(&mut server, 1, page_body("a", 15)).await;
    let second = mock_page(&mut server, 2, page_body("b", 15)).await;
    let third = mock_page(&mut server, 3, "[]".to_string()).await;

    let file = config_file(&format!("{}/v1/breweries", server.url()));
    let config = load_config(file.path().to_path_buf()).unwrap();
    let store = build_store(&config).unwrap();

    store.initialize().await.unwrap();
    first.assert_async().await;
    assert_eq!(store.snapshot().visible.len(), 15);

    let advance = store.advance_window().await.unwrap();
    assert_eq!(advance, WindowAdvance::Advanced { start_index: 5 });
    second.assert_async().await;

    store.advance_window().await.unwrap();
    store.advance_window().await.unwrap();
    assert_eq!(store.snapshot().start_index, 15);

    let removed: HashSet<BreweryId> = ["b-0", "b-1"].into_iter().map(BreweryId::from).collect();
    let outcome = store.remove_items(&removed).await;

    // 28 items left, window clamped to 13 and still full: no fetch needed.
    assert_eq!(outcome.start_index, 13);
    assert_eq!(outcome.backfill, Backfill::NotNeeded);

    let advance = store.advance_window().await.unwrap();
    assert_eq!(advance, WindowAdvance::EndOfCollection { available: 10 });
    third.assert_async().await;

    let snapshot = store.snapshot();
    assert!(!snapshot.has_more);
    assert_eq!(snapshot.start_index, 13);
    assert!(snapshot.start_index + snapshot.visible.len() <= snapshot.total_loaded);
}

#[tokio::test]
async fn test_server_error_surfaces_in_snapshot_and_can_be_retried() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("GET", "/v1/breweries")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let file = config_file(&format!("{}/v1/breweries", server.url()));
    let config = load_config(file.path().to_path_buf()).unwrap();
    let store = build_store(&config).unwrap();

    assert!(store.initialize().await.is_err());
    failing.assert_async().await;
    let snapshot = store.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("unexpected status code: 503"));
    assert!(!snapshot.loading);
    failing.remove_async().await;

    let recovered = mock_page(&mut server, 1, page_body("a", 15)).await;
    store.retry().await.unwrap().unwrap();
    recovered.assert_async().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.error, None);
    assert_eq!(snapshot.visible.len(), 15);
}
