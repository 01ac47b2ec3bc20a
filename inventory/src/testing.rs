//! Scripted in-memory transport for workflow tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

type Reply = Result<ApiResponse, TransportError>;

/// Answers requests from per-route queues and records everything it sees.
///
/// A route with an empty queue answers `404` so missing scripting shows up as
/// a failed call rather than a hang.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<HashMap<(Method, &'static str), VecDeque<Reply>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_json(self, method: Method, path: &'static str, status: u16, body: serde_json::Value) -> Self {
        self.reply_raw(method, path, status, &body.to_string())
    }

    pub(crate) fn reply_raw(self, method: Method, path: &'static str, status: u16, body: &str) -> Self {
        self.push(method, path, Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(self, method: Method, path: &'static str, message: &str) -> Self {
        self.push(method, path, Err(TransportError::new(message)));
        self
    }

    fn push(&self, method: Method, path: &'static str, reply: Reply) {
        self.replies.borrow_mut().entry((method, path)).or_default().push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        self.requests.borrow().iter().filter(|r| r.method == method && r.path == path).count()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let key = (request.method, request.path);
        self.requests.borrow_mut().push(request);
        let next = self.replies.borrow_mut().get_mut(&key).and_then(VecDeque::pop_front);
        next.unwrap_or_else(|| Ok(ApiResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_owned() }))
    }
}
