//! Integration tests for the CEP lookup flow with Wiremock
//!
//! Drives the full service through the real HTTP adapter against mock
//! ViaCEP servers.

use cep_lookup::{
    Address, CepLookupService, LookupError, LookupState, ViaCepConfig, ViaCepProvider,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(mock_server: &MockServer) -> CepLookupService {
    let provider = ViaCepProvider::new(ViaCepConfig {
        base_url: mock_server.uri(),
        timeout: Duration::from_secs(2),
    })
    .expect("client builds");
    CepLookupService::new(Arc::new(provider))
}

fn sao_paulo_fixture() -> serde_json::Value {
    serde_json::json!({
        "cep": "01001-000",
        "logradouro": "Praça da Sé",
        "bairro": "Sé",
        "localidade": "São Paulo",
        "uf": "SP"
    })
}

/// Typing "01001000" masks to "01001-000", validates, and resolves the
/// provider fixture with all five fields passed through.
#[tokio::test]
async fn test_lookup_resolves_sao_paulo_fixture() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sao_paulo_fixture()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let formatted = service.input_changed("01001000").await;
    assert_eq!(formatted, "01001-000");

    let state = service.submit().await;
    assert_eq!(
        state,
        LookupState::Resolved(Address {
            cep: "01001-000".to_string(),
            street: "Praça da Sé".to_string(),
            district: "Sé".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        })
    );
}

/// A well-formed code the provider does not know yields "not found".
#[tokio::test]
async fn test_lookup_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/00000000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"erro": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    service.input_changed("00000000").await;
    let state = service.submit().await;

    assert_eq!(state, LookupState::Failed(LookupError::NotFound));
}

/// Invalid input fails locally; the provider sees zero requests.
#[tokio::test]
async fn test_lookup_invalid_format_never_reaches_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sao_paulo_fixture()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let formatted = service.input_changed("123").await;
    assert_eq!(formatted, "123");

    let state = service.submit().await;
    assert_eq!(state, LookupState::Failed(LookupError::InvalidFormat));
}

/// A transport-level failure surfaces as a generic network error.
#[tokio::test]
async fn test_lookup_server_error_is_network_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    service.input_changed("01001-000").await;
    let state = service.submit().await;

    assert_eq!(state, LookupState::Failed(LookupError::Network));
}

/// Editing after a failure and resubmitting recovers; the service never
/// gets stuck in a terminal state.
#[tokio::test]
async fn test_edit_and_resubmit_after_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/00000000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"erro": true})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sao_paulo_fixture()))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    service.input_changed("00000000").await;
    assert_eq!(
        service.submit().await,
        LookupState::Failed(LookupError::NotFound)
    );

    service.input_changed("01001000").await;
    let state = service.submit().await;
    assert!(matches!(state, LookupState::Resolved(_)));
    assert_eq!(service.state(), state);
}

/// Re-submitting the same code issues a fresh request each time.
#[tokio::test]
async fn test_resubmit_same_code_issues_new_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sao_paulo_fixture()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    service.input_changed("01001000").await;
    let first = service.submit().await;
    let second = service.submit().await;

    assert_eq!(first, second);
    assert!(matches!(second, LookupState::Resolved(_)));
}
