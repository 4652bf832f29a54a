//! In-memory stand-ins for the browser, shared by unit and integration tests.

use crate::fetch::{FetchError, HttpRequest, HttpResponse, Transport};
use crate::shell::Navigator;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned responses in order and records every request it was given.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, FetchError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn push(&self, response: Result<HttpResponse, FetchError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no scripted response for {url}"))))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.visited.borrow_mut().push(route.to_string());
    }
}
