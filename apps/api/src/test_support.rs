//! Shared fixtures for handler tests: a stub completion client and a router
//! wired to an in-memory catalog and a temporary feedback log.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::llm_client::{CompletionClient, CompletionRequest, LlmError};
use crate::routes::build_router;
use crate::state::AppState;

const CATALOG_CSV: &str = "\
name,required_skills,industry
Data Scientist,\"python, sql, statistics\",Tech
Writer,\"writing, editing\",Media
";

/// Records every request and answers with a fixed reply, or fails.
pub struct StubCompletion {
    reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "stubbed outage".to_string(),
        })
    }
}

pub struct TestApp {
    pub llm: Arc<StubCompletion>,
    state: AppState,
    _dir: tempfile::TempDir,
}

impl TestApp {
    pub fn new(reply: &str) -> Self {
        Self::with_llm(StubCompletion::replying(reply))
    }

    pub fn failing() -> Self {
        Self::with_llm(StubCompletion::failing())
    }

    fn with_llm(llm: Arc<StubCompletion>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let feedback_log = dir.path().join("comments.txt");
        let config = Config {
            openai_api_key: "test-key".to_string(),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            careers_csv: PathBuf::from("careers.csv"),
            feedback_log: feedback_log.clone(),
            max_upload_bytes: 1024 * 1024,
            llm_max_attempts: 1,
            port: 0,
            rust_log: "debug".to_string(),
        };
        let state = AppState {
            catalog: Arc::new(CareerCatalog::load(CATALOG_CSV.as_bytes()).unwrap()),
            llm: llm.clone(),
            feedback: FeedbackSink::new(feedback_log),
            config,
        };
        Self {
            llm,
            state,
            _dir: dir,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.state.feedback.path().to_path_buf()
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

/// One multipart form part.
pub struct Part {
    name: String,
    file: Option<(String, String)>,
    data: Vec<u8>,
}

impl Part {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file: None,
            data: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &str, file_name: &str, content_type: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file: Some((file_name.to_string(), content_type.to_string())),
            data,
        }
    }
}

const BOUNDARY: &str = "counselor-test-boundary";

pub async fn post_multipart(router: Router, uri: &str, parts: Vec<Part>) -> (StatusCode, Value) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match &part.file {
            Some((file_name, content_type)) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: {content_type}\r\n\r\n",
                    part.name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    part.name
                )
                .as_bytes(),
            ),
        }
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}
