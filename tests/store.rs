use std::time::Duration;

use healthops_client::domain::types::{Cnpj, OperadoraId};
use healthops_client::routes::Route;
use healthops_client::session::Session;
use healthops_client::store::LOAD_ERROR_MESSAGE;
use healthops_client::store::detail::NOT_FOUND_MESSAGE;

mod common;

use common::{FAILING_SEARCH, OPERADORA_COUNT, SLOW_ID, TestBackend, unreachable_config};

#[actix_web::test]
async fn browses_and_filters_the_list() {
    let backend = TestBackend::start();
    let session = Session::start(&backend.config()).expect("session starts");
    let list = &session.operadoras;

    list.fetch_list().await;
    let first = list.snapshot().await;
    assert_eq!(first.total, OPERADORA_COUNT as usize);
    assert_eq!(first.items.len(), 10);
    assert_eq!(list.total_pages().await, 3);

    assert!(list.go_to_page(3).await);
    let last = list.snapshot().await;
    assert_eq!(last.page, 3);
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[0].registro_operadora.as_str(), "000021");
    assert!(!list.go_to_page(4).await);

    list.set_filter("unimed").await;
    let filtered = list.snapshot().await;
    assert_eq!(filtered.page, 1);
    assert_eq!(filtered.total, 5);
    assert_eq!(list.page_links().await, vec![Some(1)]);
    assert_eq!(filtered.error, None);
}

#[actix_web::test]
async fn failed_fetch_keeps_shown_page() {
    let backend = TestBackend::start();
    let session = Session::start(&backend.config()).expect("session starts");
    let list = &session.operadoras;
    list.fetch_list().await;
    let before = list.snapshot().await;

    list.set_filter(FAILING_SEARCH).await;

    let state = list.snapshot().await;
    assert_eq!(state.items, before.items);
    assert_eq!(state.total, before.total);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert!(!state.loading);
}

#[actix_web::test]
async fn details_route_loads_operadora_and_despesas() {
    let backend = TestBackend::start();
    let session = Session::start(&backend.config()).expect("session starts");
    let cnpj = Cnpj::new("10000000000001").expect("valid cnpj");
    let route = Route::details(&OperadoraId::from(&cnpj));

    let id = route.operadora_id().expect("details route binds an id");
    session.detail.load(id).await;

    let state = session.detail.snapshot().await;
    let operadora = state.operadora.as_ref().expect("operadora loaded");
    assert_eq!(operadora.registro_operadora.as_str(), "000001");
    assert_eq!(state.despesas.len(), 2);
    assert_eq!(state.total_despesas(), 2700.5);
    assert_eq!(state.error, None);
}

#[actix_web::test]
async fn unknown_operadora_shows_not_found() {
    let backend = TestBackend::start();
    let session = Session::start(&backend.config()).expect("session starts");

    session
        .detail
        .load(OperadoraId::new("424242").expect("valid id"))
        .await;

    let state = session.detail.snapshot().await;
    assert_eq!(state.operadora, None);
    assert_eq!(state.error.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[actix_web::test]
async fn timeout_surfaces_generic_error() {
    let backend = TestBackend::start();
    let config = backend.config_with_timeout(Duration::from_millis(200));
    let session = Session::start(&config).expect("session starts");

    session
        .detail
        .load(OperadoraId::new(SLOW_ID).expect("valid id"))
        .await;

    let state = session.detail.snapshot().await;
    assert_eq!(state.operadora, None);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert!(!state.loading);
}

#[actix_web::test]
async fn loads_statistics_dashboard() {
    let backend = TestBackend::start();
    let session = Session::start(&backend.config()).expect("session starts");

    session.statistics.load().await;

    let state = session.statistics.snapshot().await;
    let stats = state.statistics.expect("statistics loaded");
    assert_eq!(stats.media_despesas, 1000.0);
    assert_eq!(stats.despesas_por_uf[0].uf, "SP");
    assert_eq!(state.error, None);
}

#[actix_web::test]
async fn unreachable_backend_marks_every_store_failed() {
    let session = Session::start(&unreachable_config()).expect("session starts");

    session.operadoras.fetch_list().await;
    session.statistics.load().await;

    let list = session.operadoras.snapshot().await;
    assert!(list.items.is_empty());
    assert_eq!(list.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(
        session.statistics.snapshot().await.error.as_deref(),
        Some(LOAD_ERROR_MESSAGE)
    );
}
