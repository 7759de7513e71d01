use std::sync::Arc;
use std::time::Duration;

use vellum_runtime::{FsFetcher, Loader};
use vellum_testing::{Delivery, RecordingCallback, StubFetcher, fixtures};
use vellum_types::{ComponentNode, RemoteComposeConfig};

fn loader_with(fetcher: StubFetcher) -> (Loader, Arc<RecordingCallback>) {
    let loader = Loader::new(RemoteComposeConfig::default(), Arc::new(fetcher));
    let callback = Arc::new(RecordingCallback::new());
    loader.attach_view(callback.clone());
    (loader, callback)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_root_delivers_decoded_tree() {
    let fetcher = StubFetcher::new().with_document("compose.json", &fixtures::column_scenario_document());
    let (loader, callback) = loader_with(fetcher);

    loader.load_root().await.unwrap();

    let deliveries = callback.deliveries();
    assert_eq!(deliveries.len(), 1);
    match &deliveries[0] {
        Delivery::Components(tree) => assert_eq!(tree.kind(), "Column"),
        other => panic!("expected components, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_root_reports_malformed_payload() {
    let fetcher = StubFetcher::new().with_raw("compose.json", "{not json");
    let (loader, callback) = loader_with(fetcher);

    loader.load_root().await.unwrap();

    let deliveries = callback.deliveries();
    assert_eq!(deliveries.len(), 1);
    match &deliveries[0] {
        Delivery::Error(message) => {
            assert!(
                message.starts_with("Error loading components: Malformed document:"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_root_reports_unknown_component() {
    let fetcher = StubFetcher::new().with_document("compose.json", &fixtures::malformed_document());
    let (loader, callback) = loader_with(fetcher);

    loader.load_root().await.unwrap();

    match &callback.deliveries()[..] {
        [Delivery::Error(message)] => {
            assert_eq!(
                message,
                "Error loading components: Unknown component type: Mystery"
            );
        }
        other => panic!("expected one error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_root_reports_missing_document() {
    let (loader, callback) = loader_with(StubFetcher::new());

    loader.load_root().await.unwrap();

    match &callback.deliveries()[..] {
        [Delivery::Error(message)] => {
            assert_eq!(
                message,
                "Error loading components: Document not found: compose.json"
            );
        }
        other => panic!("expected one error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_detached_view_receives_nothing() {
    let fetcher = StubFetcher::new().with_document("compose.json", &fixtures::column_scenario_document());
    let (loader, callback) = loader_with(fetcher);
    loader.detach_view();

    loader.load_root().await.unwrap();

    assert!(callback.deliveries().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overlapping_loads_each_deliver_once() {
    let fetcher = StubFetcher::new().with_document("compose.json", &fixtures::column_scenario_document());
    let (loader, callback) = loader_with(fetcher);

    let first = loader.load_root();
    let second = loader.load_root();
    first.await.unwrap();
    second.await.unwrap();

    let deliveries = callback.wait_for(2, Duration::from_secs(5));
    assert_eq!(deliveries.len(), 2);
    assert!(
        deliveries
            .iter()
            .all(|d| matches!(d, Delivery::Components(_)))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_screen_resolves_listed_screen() {
    let fetcher = StubFetcher::new()
        .with_document("compose_screen1.json", &fixtures::screen_catalog_document());
    let (loader, callback) = loader_with(fetcher);

    let (tx, rx) = tokio::sync::oneshot::channel();
    loader
        .load_screen("details", move |found| {
            let _ = tx.send(found);
        })
        .await
        .unwrap();

    assert!(rx.await.unwrap());
    match &callback.deliveries()[..] {
        [Delivery::Components(ComponentNode::Screen(screen))] => {
            assert_eq!(screen.id, "details");
            assert_eq!(screen.children.len(), 2);
        }
        other => panic!("expected one screen delivery, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_screen_resolves_nested_screen() {
    let fetcher = StubFetcher::new()
        .with_document("compose_screen1.json", &fixtures::screen_catalog_document());
    let (loader, callback) = loader_with(fetcher);

    let (tx, rx) = tokio::sync::oneshot::channel();
    loader
        .load_screen("nested", move |found| {
            let _ = tx.send(found);
        })
        .await
        .unwrap();

    assert!(rx.await.unwrap());
    match &callback.deliveries()[..] {
        [Delivery::Components(ComponentNode::Screen(screen))] => {
            assert_eq!(screen.id, "nested");
        }
        other => panic!("expected one screen delivery, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_screen_unknown_id_is_reported() {
    let fetcher = StubFetcher::new()
        .with_document("compose_screen1.json", &fixtures::screen_catalog_document());
    let (loader, callback) = loader_with(fetcher);

    let (tx, rx) = tokio::sync::oneshot::channel();
    loader
        .load_screen("ghost", move |found| {
            let _ = tx.send(found);
        })
        .await
        .unwrap();

    assert!(!rx.await.unwrap());
    match &callback.deliveries()[..] {
        [Delivery::Error(message)] => {
            assert_eq!(message, "Screen not found for ID: ghost");
        }
        other => panic!("expected one error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_screen_fetch_failure_is_reported() {
    let (loader, callback) = loader_with(StubFetcher::new());

    let (tx, rx) = tokio::sync::oneshot::channel();
    loader
        .load_screen("details", move |found| {
            let _ = tx.send(found);
        })
        .await
        .unwrap();

    assert!(!rx.await.unwrap());
    match &callback.deliveries()[..] {
        [Delivery::Error(message)] => {
            assert_eq!(
                message,
                "Error loading screen: Document not found: compose_screen1.json"
            );
        }
        other => panic!("expected one error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_root_from_directory_fetcher() {
    let dir = tempfile::tempdir().unwrap();
    fixtures::write_document(dir.path(), "compose.json", &fixtures::dashboard_document()).unwrap();

    let loader = Loader::new(
        RemoteComposeConfig::default(),
        Arc::new(FsFetcher::new(dir.path())),
    );
    let callback = Arc::new(RecordingCallback::new());
    loader.attach_view(callback.clone());

    loader.load_root().await.unwrap();

    match &callback.deliveries()[..] {
        [Delivery::Components(tree)] => assert_eq!(tree.kind(), "ScrollView"),
        other => panic!("expected one delivery, got {other:?}"),
    }
}
