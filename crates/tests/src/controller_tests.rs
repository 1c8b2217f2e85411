use crate::common::{MockBackend, PANGGILAN_ROWS, REJECTED_YEAR};
use client::{ListController, ResourceSource};
use pretty_assertions::assert_eq;
use shared_types::{LhkpnReport, Panggilan, RegistryErrorKind};
use std::time::Duration;
use tokio::sync::mpsc;

type PanggilanController = ListController<Panggilan, ResourceSource<Panggilan>>;

fn panggilan_controller(
    backend: &MockBackend,
) -> (PanggilanController, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller =
        ListController::for_resource(backend.client(), &backend.settings(), 2024, tx);
    (controller, rx)
}

fn ids(controller: &PanggilanController) -> Vec<i64> {
    controller
        .state()
        .items
        .iter()
        .filter_map(|p| p.id)
        .collect()
}

#[tokio::test]
async fn test_load_fetches_first_page_unfiltered() {
    let backend = MockBackend::start().await;
    let (controller, _rx) = panggilan_controller(&backend);
    controller.load().await;

    let state = controller.state();
    assert!(state.has_loaded);
    assert!(!state.loading);
    assert_eq!(state.pagination.current_page, 1);
    assert_eq!(state.pagination.total, PANGGILAN_ROWS);
    assert_eq!(ids(&controller), (1..=10).collect::<Vec<_>>());
    assert!(!backend.requests_to("/panggilan")[0].query.contains_key("tahun"));
}

#[tokio::test]
async fn test_later_request_wins_when_earlier_resolves_last() {
    let backend = MockBackend::start().await;
    let (controller, mut rx) = panggilan_controller(&backend);
    controller.load().await;

    backend.delay_page(2, Duration::from_millis(300));
    let (slow, fast) = tokio::join!(controller.go_to_page(2), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.go_to_page(3).await
    });
    slow.unwrap();
    fast.unwrap();

    let state = controller.state();
    assert_eq!(state.pagination.current_page, 3);
    assert_eq!(ids(&controller), vec![21, 22, 23]);
    assert!(!state.loading);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_filter_change_fetches_page_one() {
    let backend = MockBackend::start().await;
    let (controller, _rx) = panggilan_controller(&backend);
    controller.load().await;
    controller.go_to_page(3).await.unwrap();

    controller.set_filter("tahun", 2024).await;

    let state = controller.state();
    assert_eq!(state.pagination.current_page, 1);
    assert_eq!(state.pagination.total, PANGGILAN_ROWS - 3);
    assert_eq!(state.filters.get("tahun"), Some("2024"));

    let last = backend.requests_to("/panggilan").pop().unwrap();
    assert_eq!(last.query.get("page").map(String::as_str), Some("1"));
    assert_eq!(last.query.get("tahun").map(String::as_str), Some("2024"));
}

#[tokio::test]
async fn test_out_of_range_page_is_rejected_without_request() {
    let backend = MockBackend::start().await;
    let (controller, _rx) = panggilan_controller(&backend);
    controller.load().await;

    let err = controller.go_to_page(9).await.unwrap_err();
    assert_eq!(err.kind(), RegistryErrorKind::InvalidRange);
    assert_eq!(backend.requests_to("/panggilan").len(), 1);
}

#[tokio::test]
async fn test_failure_keeps_previous_page_and_notifies_once() {
    let backend = MockBackend::start().await;
    let (controller, mut rx) = panggilan_controller(&backend);
    controller.load().await;
    let before = controller.state();

    controller.set_filter("tahun", REJECTED_YEAR).await;

    let after = controller.state();
    assert_eq!(after.items, before.items);
    assert_eq!(after.pagination, before.pagination);
    assert!(!after.loading);
    assert_eq!(after.last_error.as_deref(), Some("Tahun tidak valid"));
    assert_eq!(rx.try_recv().unwrap(), "Tahun tidak valid");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_first_load_failure_leaves_empty_list() {
    let backend = MockBackend::start().await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let controller = ListController::<LhkpnReport, ResourceSource<LhkpnReport>>::for_resource(
        backend.client(),
        &backend.settings(),
        2024,
        tx,
    );
    controller.load().await;

    let state = controller.state();
    assert!(state.items.is_empty());
    assert!(!state.has_loaded);
    assert!(!state.loading);
    assert_eq!(rx.try_recv().unwrap(), "Database sedang sibuk");
}

#[tokio::test]
async fn test_refresh_refetches_current_page_and_filters() {
    let backend = MockBackend::start().await;
    let (controller, _rx) = panggilan_controller(&backend);
    controller.load().await;
    controller.go_to_page(2).await.unwrap();

    controller.refresh().await;

    let requests = backend.requests_to("/panggilan");
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].query, requests[1].query);
    assert_eq!(controller.state().pagination.current_page, 2);
}
