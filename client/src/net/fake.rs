//! Scripted [`Transport`] for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{ApiReply, ApiRequest, Transport, TransportError};

/// Returns queued replies in order and records every request it receives.
/// An empty queue answers with a network error.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<VecDeque<Result<ApiReply, TransportError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, reply: ApiReply) -> Self {
        self.replies.borrow_mut().push_back(Ok(reply));
        self
    }

    pub(crate) fn fail(self, error: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}
