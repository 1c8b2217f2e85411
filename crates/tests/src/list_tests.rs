use crate::common::{self, MockBackend, PANGGILAN_ROWS};
use pretty_assertions::assert_eq;
use shared_types::{
    AgendaPimpinan, Filters, ItsbatNikah, ListQuery, LhkpnReport, PaguAnggaran, Panggilan,
    RegistryError, RegistryErrorKind, NETWORK_FAILURE_MESSAGE,
};

#[tokio::test]
async fn test_list_returns_requested_page_with_metadata() {
    let backend = MockBackend::start().await;
    let page = backend
        .client()
        .list::<Panggilan>(&ListQuery::new(2, Filters::new()))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, Some(11));
    assert_eq!(page.meta.current_page, 2);
    assert_eq!(page.meta.last_page, 3);
    assert_eq!(page.meta.total, PANGGILAN_ROWS);
}

#[tokio::test]
async fn test_list_sends_page_and_filters() {
    let backend = MockBackend::start().await;
    let page = backend
        .client()
        .list::<Panggilan>(&ListQuery::first_page(Filters::new().with("tahun", 2023)))
        .await
        .unwrap();

    assert_eq!(page.meta.total, 3);
    assert!(page.items.iter().all(|p| p.tahun_perkara == 2023));

    let requests = backend.requests_to("/panggilan");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.get("page").map(String::as_str), Some("1"));
    assert_eq!(requests[0].query.get("tahun").map(String::as_str), Some("2023"));
}

#[tokio::test]
async fn test_list_does_not_send_api_key() {
    let backend = MockBackend::start().await;
    backend
        .client()
        .list::<Panggilan>(&ListQuery::first_page(Filters::new()))
        .await
        .unwrap();
    assert_eq!(backend.requests_to("/panggilan")[0].api_key, None);
}

#[tokio::test]
async fn test_status_envelope_is_normalized() {
    let backend = MockBackend::start().await;
    let page = backend
        .client()
        .list::<AgendaPimpinan>(&ListQuery::first_page(Filters::new().with("tahun", 2024)))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].isi_agenda, "Pembinaan pegawai");
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.last_page, 1);
    assert_eq!(page.meta.total, 2);
}

#[tokio::test]
async fn test_status_error_envelope_keeps_message() {
    let backend = MockBackend::start().await;
    let err = backend
        .client()
        .list::<AgendaPimpinan>(&ListQuery::first_page(Filters::new().with("bulan", 2)))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), RegistryErrorKind::Server);
    assert_eq!(err.user_message(), "Agenda bulan ini belum tersedia");
}

#[tokio::test]
async fn test_unpaginated_resource_omits_page_param() {
    let backend = MockBackend::start().await;
    let page = backend
        .client()
        .list::<PaguAnggaran>(&ListQuery::first_page(Filters::new().with("tahun", 2024)))
        .await
        .unwrap();

    assert_eq!(page.items[0].jumlah_pagu, 1_500_000.0);
    assert_eq!(page.items[1].jumlah_pagu, 250_000_000.0);
    assert_eq!(page.meta.last_page, 1);

    let request = &backend.requests_to("/pagu")[0];
    assert!(!request.query.contains_key("page"));
    assert_eq!(request.query.get("tahun").map(String::as_str), Some("2024"));
}

#[tokio::test]
async fn test_server_failure_message_is_passed_through() {
    let backend = MockBackend::start().await;
    let err = backend
        .client()
        .list::<LhkpnReport>(&ListQuery::first_page(Filters::new()))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::server(Some(500), "Database sedang sibuk")
    );
}

#[tokio::test]
async fn test_non_json_error_reports_http_status() {
    let backend = MockBackend::start().await;
    let err = backend
        .client()
        .list::<ItsbatNikah>(&ListQuery::first_page(Filters::new()))
        .await
        .unwrap_err();

    assert_eq!(err, RegistryError::server(Some(502), "HTTP 502"));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = common::unreachable_client().await;
    let err = client
        .list::<Panggilan>(&ListQuery::first_page(Filters::new()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), RegistryErrorKind::Network);
    assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
}
