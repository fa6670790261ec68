#![cfg(test)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::application::interactors::advanced_results::GetAdvancedResultsInteractor;
use crate::tests::mocks::{MockCollectionReaderMock, MockDBSessionMock};

pub fn make_interactor(reader: MockCollectionReaderMock) -> GetAdvancedResultsInteractor {
    let mut db_session = MockDBSessionMock::new();
    db_session.expect_commit().returning(|| Ok(()));
    GetAdvancedResultsInteractor::new(Arc::new(db_session), Arc::new(reader), "-created_at".to_string())
}

pub async fn send_get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
