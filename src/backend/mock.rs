//! Mock backend for testing.
//!
//! Provides a programmable backend that replays scripted responses
//! without needing an SNMP agent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Backend, ContextData, Credentials, Dispatch, Target};
use crate::error::{Error, Result};
use crate::fetch::Response;
use crate::request::Command;
use crate::varbind::VarBind;

/// One scripted reply, returned for one pull of a response source.
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Yield this response (successful or carrying an error signal).
    Response(Response),
    /// Yield a backend error with this message.
    Error(String),
}

impl From<Response> for MockReply {
    fn from(response: Response) -> Self {
        MockReply::Response(response)
    }
}

/// A dispatch recorded by the mock backend.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedDispatch {
    /// Endpoint the command was addressed to.
    pub target: Target,
    /// Context the command was scoped to.
    pub context: ContextData,
    /// The command itself.
    pub command: Command,
    /// ID of the engine the command was dispatched on.
    pub engine: u64,
}

/// Engine handed out by [`MockBackend`], identified by creation order.
#[derive(Debug)]
pub struct MockEngine {
    id: u64,
}

impl MockEngine {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Mock backend state shared between clones.
#[derive(Default)]
struct MockBackendInner {
    /// One script per upcoming dispatch
    scripts: VecDeque<Vec<MockReply>>,
    /// Failures for upcoming dispatches, checked before scripts
    dispatch_failures: VecDeque<String>,
    /// Recorded dispatches
    dispatches: Vec<RecordedDispatch>,
    /// Total pulls across all sources
    pulls: usize,
    /// Engines created so far
    engines: u64,
}

/// Mock backend for exercising the client without a network.
///
/// Every dispatch consumes the next queued script; each pull of the
/// returned source yields the script's next reply. A dispatch with no
/// script queued returns an empty source.
///
/// Accepts any credentials and never inspects them.
///
/// # Example
///
/// ```rust
/// use quicksnmp::{Client, Community, MockBackend, Response, VarBind};
///
/// let mock = MockBackend::new();
/// mock.queue_response(Response::ok(vec![VarBind::new("1.3.6.1.2.1.1.5.0", "sw1")]));
///
/// let mut client = Client::new(mock.clone());
/// let row = client
///     .get("192.0.2.1", ["1.3.6.1.2.1.1.5.0"], &Community::v2c("public"))
///     .unwrap();
/// assert_eq!(row.get("1.3.6.1.2.1.1.5.0").and_then(|v| v.as_str()), Some("sw1"));
/// assert_eq!(mock.dispatches().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockBackendInner>>,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockBackendInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the replies for the next dispatch.
    pub fn queue_script<I>(&self, replies: I)
    where
        I: IntoIterator,
        I::Item: Into<MockReply>,
    {
        let script = replies.into_iter().map(Into::into).collect();
        self.lock().scripts.push_back(script);
    }

    /// Queue a single-response script.
    pub fn queue_response(&self, response: Response) {
        self.queue_script([response]);
    }

    /// Queue a successful single-response script built from bindings.
    pub fn queue_varbinds(&self, varbinds: Vec<VarBind>) {
        self.queue_response(Response::ok(varbinds));
    }

    /// Make the next dispatch fail with a backend error.
    pub fn fail_next_dispatch(&self, msg: impl Into<String>) {
        self.lock().dispatch_failures.push_back(msg.into());
    }

    /// All dispatches so far, in order.
    pub fn dispatches(&self) -> Vec<RecordedDispatch> {
        self.lock().dispatches.clone()
    }

    /// Total number of pulls across every source handed out.
    pub fn pulls(&self) -> usize {
        self.lock().pulls
    }

    /// Number of engines created.
    pub fn engines_created(&self) -> u64 {
        self.lock().engines
    }

    /// Scripts queued but not yet dispatched.
    pub fn pending_scripts(&self) -> usize {
        self.lock().scripts.len()
    }
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("MockBackend")
            .field("pending_scripts", &inner.scripts.len())
            .field("dispatches", &inner.dispatches.len())
            .field("pulls", &inner.pulls)
            .finish()
    }
}

impl Backend for MockBackend {
    type Credentials = dyn Credentials;
    type Engine = MockEngine;
    type Responses = MockResponses;

    fn new_engine(&self) -> Result<MockEngine> {
        let mut inner = self.lock();
        inner.engines += 1;
        Ok(MockEngine { id: inner.engines })
    }

    fn dispatch(
        &self,
        engine: &mut MockEngine,
        request: Dispatch<'_, dyn Credentials>,
    ) -> Result<MockResponses> {
        let mut inner = self.lock();

        if let Some(msg) = inner.dispatch_failures.pop_front() {
            return Err(Error::backend(msg));
        }

        inner.dispatches.push(RecordedDispatch {
            target: request.target.clone(),
            context: request.context.clone(),
            command: request.command,
            engine: engine.id,
        });

        let replies = inner.scripts.pop_front().unwrap_or_default();
        Ok(MockResponses {
            replies: replies.into(),
            inner: Arc::clone(&self.inner),
        })
    }
}

/// Response source returned by [`MockBackend`].
pub struct MockResponses {
    replies: VecDeque<MockReply>,
    inner: Arc<Mutex<MockBackendInner>>,
}

impl Iterator for MockResponses {
    type Item = Result<Response>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pulls += 1;

        match self.replies.pop_front()? {
            MockReply::Response(response) => Some(Ok(response)),
            MockReply::Error(msg) => Some(Err(Error::backend(msg))),
        }
    }
}
