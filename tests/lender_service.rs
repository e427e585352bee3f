mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{client_config, fill_sample_loan, wait_for_server};
use loan_intake::client::HttpLoanClient;
use loan_intake::lender::{build_router, InMemoryRepository, LenderState};
use loan_intake::server::HttpServer;
use loan_intake::ui::session::LoanFormSession;
use loan_intake::ui::submission::Notice;

fn router(repo: Arc<InMemoryRepository>) -> axum::Router {
    build_router(LenderState::new(repo))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_loan(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/loans")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_returns_201_with_generated_id() {
    let repo = Arc::new(InMemoryRepository::new());
    let app = router(repo.clone());

    let response = app
        .clone()
        .oneshot(post_loan(r#"{"borrower": {"firstName": "John"}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Loan created successfully", "id": "Loans/1"})
    );

    let second = app.oneshot(post_loan("{}")).await.unwrap();
    assert_eq!(json_body(second).await["id"], "Loans/2");

    let stored = repo.get("Loans/1").unwrap();
    assert_eq!(stored["borrower"]["firstName"], "John");
    assert_eq!(stored["@metadata"]["@collection"], "Loans");
}

#[tokio::test]
async fn non_object_body_fails_generically() {
    let repo = Arc::new(InMemoryRepository::new());
    let response = router(repo.clone())
        .oneshot(post_loan("[1, 2, 3]"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Failed to create loan"})
    );
    assert!(repo.is_empty());
}

#[tokio::test]
async fn index_and_health() {
    let app = router(Arc::new(InMemoryRepository::new()));

    let index = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let text = index.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&text[..], b"Hello from the Lender Service!");

    let health = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        json_body(health).await,
        json!({"status": "healthy", "service": "lender"})
    );
}

#[tokio::test]
async fn form_submits_to_a_running_lender() {
    let repo = Arc::new(InMemoryRepository::new());
    let server = HttpServer::bind("lender", "127.0.0.1:0").await.unwrap();
    let addr = server.local_addr();
    let handle = server.handle();
    let task = tokio::spawn(server.run(router(repo.clone())));
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);

    let client = HttpLoanClient::new(&client_config(&format!("http://{}", addr))).unwrap();
    let mut session = LoanFormSession::default();
    fill_sample_loan(&mut session);
    let notice = session.submit(&client).await;

    assert_eq!(
        notice,
        Some(Notice::Created {
            id: "Loans/1".to_string()
        })
    );
    let stored = repo.get("Loans/1").unwrap();
    assert_eq!(stored["borrower"]["ssn"], "123456789");
    assert_eq!(stored["loan"]["originalLoanAmount"], "7000");

    handle.shutdown();
    tokio::time::timeout(Duration::from_secs(15), task)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}
