//! Builder for SNMP clients.
//!
//! # Examples
//!
//! ```rust
//! # use quicksnmp::{Client, ContextData, MockBackend, RetryPolicy};
//! # use std::time::Duration;
//! let client = Client::builder(MockBackend::new())
//!     .retry(RetryPolicy::fixed(5, Duration::from_millis(100)))
//!     .context(ContextData::named("vlan-20"))
//!     .reuse_engine(true)
//!     .build();
//! ```

use crate::backend::{Backend, ContextData};
use crate::retry::RetryPolicy;

use super::{Client, ClientConfig, EngineMode};

/// Builder for [`Client`].
pub struct ClientBuilder<B: Backend> {
    backend: B,
    config: ClientConfig,
}

impl<B: Backend> ClientBuilder<B> {
    pub(crate) fn new(backend: B) -> Self {
        Self {
            backend,
            config: ClientConfig::default(),
        }
    }

    /// Set the retry policy (default: 3 failures per item, no delay).
    pub fn retry(mut self, retry: impl Into<RetryPolicy>) -> Self {
        self.config.retry = retry.into();
        self
    }

    /// Set only the failure limit, keeping the configured delay.
    pub fn retry_limit(mut self, limit: u32) -> Self {
        self.config.retry.limit = limit;
        self
    }

    /// Scope every command to this context (default: the default context).
    pub fn context(mut self, context: ContextData) -> Self {
        self.config.context = context;
        self
    }

    /// Set the engine lifecycle directly.
    pub fn engine_mode(mut self, mode: EngineMode) -> Self {
        self.config.engine_mode = mode;
        self
    }

    /// Keep one backend engine across commands instead of creating one per
    /// command (default: `false`).
    pub fn reuse_engine(self, reuse: bool) -> Self {
        self.engine_mode(if reuse {
            EngineMode::Reuse
        } else {
            EngineMode::PerCall
        })
    }

    /// Build the client.
    pub fn build(self) -> Client<B> {
        Client::with_config(self.backend, self.config)
    }
}
