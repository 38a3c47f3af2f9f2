//! Test support
//!
//! [`MockBackend`] serves canned responses keyed by full request URL and
//! records every request it sees. Unstubbed URLs answer "not found".

use crate::backend::{Backend, BackendError, Query};
use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A canned backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// 2xx with this body
    Body(Bytes),
    /// The resource does not exist
    NotFound,
    /// Non-2xx status
    Status(u16),
}

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Option<Query>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// In-memory [`Backend`] for tests
#[derive(Debug, Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `url` with a raw body
    pub fn stub_body(&self, url: impl Into<String>, body: impl Into<Bytes>) {
        self.stub(url, MockResponse::Body(body.into()));
    }

    /// Answer `url` with `value` serialized as JSON
    pub fn stub_json<T: Serialize>(&self, url: impl Into<String>, value: &T) {
        let body = serde_json::to_vec(value).unwrap_or_default();
        self.stub_body(url, body);
    }

    /// Answer `url` with "not found"
    pub fn stub_not_found(&self, url: impl Into<String>) {
        self.stub(url, MockResponse::NotFound);
    }

    /// Answer `url` with a non-2xx status
    pub fn stub_status(&self, url: impl Into<String>, status: u16) {
        self.stub(url, MockResponse::Status(status));
    }

    /// Register any canned response for `url`
    pub fn stub(&self, url: impl Into<String>, response: MockResponse) {
        self.state().responses.insert(url.into(), response);
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    /// Requested URLs, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.state().requests.iter().map(|r| r.url.clone()).collect()
    }

    /// Forget recorded requests, keeping stubs
    pub fn reset_requests(&self) {
        self.state().requests.clear();
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn fetch(&self, url: &str, params: Option<&Query>) -> Result<Bytes, BackendError> {
        let mut state = self.state();
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            params: params.cloned(),
        });

        match state.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(BackendError::Status { status: *status }),
            Some(MockResponse::NotFound) | None => Err(BackendError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendExt;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_mock_backend_serves_stubs_and_records() {
        let backend = MockBackend::new();
        backend.stub_json("http://example.com/a", &json!({"ok": true}));
        backend.stub_status("http://example.com/b", 500);

        let body: Value = backend.process("http://example.com/a", None).await.unwrap();
        assert_eq!(body, json!({"ok": true}));

        let err = backend
            .process::<Value>("http://example.com/b", None)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 500 }));

        let err = backend
            .process::<Value>("http://example.com/missing", None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(
            backend.requested_urls(),
            vec![
                "http://example.com/a".to_string(),
                "http://example.com/b".to_string(),
                "http://example.com/missing".to_string(),
            ]
        );

        backend.reset_requests();
        assert!(backend.requests().is_empty());
    }
}
