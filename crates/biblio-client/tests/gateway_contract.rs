use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use biblio_client::{books, loans, users, ApiError, Gateway, GatewayConfig, RequestOptions};
use biblio_types::{BookSearch, LoanStatus};
use serde_json::{json, Value};

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let read = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let authorizations: Vec<&str> = headers
        .get_all(header::AUTHORIZATION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    Json(json!({
        "authorization": read(header::AUTHORIZATION),
        "authorizations": authorizations,
        "contentType": read(header::CONTENT_TYPE),
    }))
}

async fn get_book(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "livre introuvable" })),
        )
            .into_response();
    }
    Json(json!({
        "id": id,
        "titre": "Dune",
        "auteur": "Frank Herbert",
        "categorie": "SF",
        "isbn": "9780441013593"
    }))
    .into_response()
}

async fn search_books(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!([{
        "id": 1,
        "titre": params.get("titre").cloned().unwrap_or_default(),
        "auteur": params.get("auteur").cloned().unwrap_or_default(),
        "categorie": params.get("categorie").cloned().unwrap_or_default(),
        "isbn": ""
    }]))
}

async fn book_loans(Path(id): Path<i64>) -> Json<Value> {
    let statut = if id == 1 { "ACTIF" } else { "RETOURNE" };
    Json(json!([{
        "id": 10,
        "utilisateurId": 2,
        "livreId": id,
        "dateEmprunt": "2026-10-01",
        "dateRetourPrevue": "2026-10-15",
        "statut": statut
    }]))
}

async fn return_loan(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({
        "id": id,
        "utilisateurId": 2,
        "livreId": 5,
        "dateRetourEffective": "2026-10-16",
        "statut": "RETOURNE"
    }))
}

async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/api/echo", get(echo_headers).post(echo_headers))
        .route("/api/books/search", get(search_books))
        .route("/api/books/:id", get(get_book).delete(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/api/boom",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "stack trace") }),
        )
        .route("/api/empty", get(|| async { StatusCode::OK }))
        .route("/api/loans/book/:id", get(book_loans))
        .route("/api/loans/:id/return", put(return_loan))
        .route(
            "/api/users/:id",
            get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "message": "Accès refusé" }))) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend stopped");
    });
    addr
}

async fn gateway() -> Gateway {
    let addr = spawn_backend().await;
    Gateway::new(GatewayConfig {
        base_origin: format!("http://{addr}"),
        timeout: None,
    })
    .expect("failed to build gateway")
}

fn unreachable_gateway() -> Gateway {
    Gateway::new(GatewayConfig {
        base_origin: "http://127.0.0.1:1".into(),
        timeout: None,
    })
    .expect("failed to build gateway")
}

#[tokio::test]
async fn token_is_sent_as_bearer_header() {
    let gateway = gateway().await;
    let body = gateway
        .request("/api/echo", Some("abc"), RequestOptions::get())
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["authorization"], "Bearer abc");
}

#[tokio::test]
async fn token_replaces_caller_authorization_header() {
    let gateway = gateway().await;
    let options = RequestOptions::get().with_header(
        header::AUTHORIZATION,
        header::HeaderValue::from_static("Bearer stale"),
    );
    let body = gateway
        .request("/api/echo", Some("abc"), options)
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["authorizations"], json!(["Bearer abc"]));
}

#[tokio::test]
async fn caller_authorization_is_kept_without_token() {
    let gateway = gateway().await;
    let options = RequestOptions::get().with_header(
        header::AUTHORIZATION,
        header::HeaderValue::from_static("Basic dXNlcjpwdw=="),
    );
    let body = gateway
        .request("/api/echo", None, options)
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["authorizations"], json!(["Basic dXNlcjpwdw=="]));
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let gateway = gateway().await;
    let body = gateway
        .request("/api/echo", None, RequestOptions::get())
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["authorization"], Value::Null);
}

#[tokio::test]
async fn content_type_defaults_to_json() {
    let gateway = gateway().await;
    let options = RequestOptions::post_json(&json!({ "x": 1 })).unwrap();
    let body = gateway
        .request("/api/echo", None, options)
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["contentType"], "application/json");
}

#[tokio::test]
async fn explicit_content_type_is_kept() {
    let gateway = gateway().await;
    let options = RequestOptions::method(reqwest::Method::POST).with_header(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain"),
    );
    let body = gateway
        .request("/api/echo", None, options)
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["contentType"], "text/plain");
}

#[tokio::test]
async fn form_payload_is_not_forced_to_json() {
    let gateway = gateway().await;
    let options = RequestOptions::method(reqwest::Method::POST)
        .form(vec![("titre".to_string(), "Dune".to_string())]);
    let body = gateway
        .request("/api/echo", None, options)
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["contentType"], "application/x-www-form-urlencoded");
}

#[tokio::test]
async fn no_content_yields_no_value() {
    let gateway = gateway().await;
    let result = gateway
        .request("/api/books/3", Some("abc"), RequestOptions::delete())
        .await;
    assert_eq!(result, Ok(None));

    books::delete(&gateway, 3, Some("abc"))
        .await
        .expect("delete should succeed on 204");
}

#[tokio::test]
async fn empty_success_body_yields_no_value() {
    let gateway = gateway().await;
    let result = gateway.request("/api/empty", None, RequestOptions::get()).await;
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn backend_message_is_surfaced() {
    let gateway = gateway().await;
    let err = books::get(&gateway, 404, Some("abc")).await.unwrap_err();

    assert_eq!(err.to_string(), "livre introuvable");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_failure_uses_status_fallback() {
    let gateway = gateway().await;
    let err = gateway
        .request("/api/boom", None, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Erreur API: 500");
}

#[tokio::test]
async fn transport_failure_has_no_status() {
    let err = unreachable_gateway()
        .request("/api/books", Some("abc"), RequestOptions::get())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn missing_token_never_reaches_the_network() {
    let gateway = unreachable_gateway();

    assert_eq!(books::list(&gateway, None).await, Err(ApiError::Unauthenticated));
    assert_eq!(loans::overdue(&gateway, Some("")).await, Err(ApiError::Unauthenticated));
    assert_eq!(users::delete(&gateway, 1, None).await, Err(ApiError::Unauthenticated));
}

#[tokio::test]
async fn absolute_endpoint_bypasses_base_origin() {
    let addr = spawn_backend().await;
    let body = unreachable_gateway()
        .request(&format!("http://{addr}/api/echo"), Some("abc"), RequestOptions::get())
        .await
        .expect("request failed")
        .expect("empty body");

    assert_eq!(body["authorization"], "Bearer abc");
}

#[tokio::test]
async fn search_forwards_criteria_as_query() {
    let gateway = gateway().await;
    let criteria = BookSearch {
        titre: Some("Le Petit Prince".into()),
        auteur: None,
        categorie: Some("Conte".into()),
    };
    let found = books::search(&gateway, &criteria, Some("abc"))
        .await
        .expect("search failed");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].titre, "Le Petit Prince");
    assert_eq!(found[0].categorie, "Conte");
    assert_eq!(found[0].auteur, "");
}

#[tokio::test]
async fn availability_follows_open_loans() {
    let gateway = gateway().await;

    assert!(!books::is_available(&gateway, 1, Some("abc")).await.unwrap());
    assert!(books::is_available(&gateway, 2, Some("abc")).await.unwrap());
}

#[tokio::test]
async fn returning_a_loan_decodes_the_updated_record() {
    let gateway = gateway().await;
    let loan = loans::return_loan(&gateway, 10, Some("abc"))
        .await
        .expect("return failed");

    assert_eq!(loan.statut, LoanStatus::Returned);
    assert_eq!(loan.date_retour_effective.as_deref(), Some("2026-10-16"));
}

#[tokio::test]
async fn forbidden_user_lookup_reports_backend_message() {
    let gateway = gateway().await;
    let err = users::get(&gateway, 9, Some("abc")).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Api {
            status: 403,
            message: "Accès refusé".into()
        }
    );
}
