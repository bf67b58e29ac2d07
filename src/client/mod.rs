//! SNMP command functions.
//!
//! [`Client`] wraps a [`Backend`] and runs GET, SET and GETBULK commands
//! through it, draining each command's response source into [`Row`]s.
//!
//! The module-level [`get`], [`set`], [`get_bulk`] and [`get_bulk_auto`]
//! functions run a single command with the default configuration.

mod builder;

pub use builder::ClientBuilder;

use crate::backend::{Backend, ContextData, Credentials, Dispatch, Target};
use crate::error::{Error, Result};
use crate::fetch::drain_with;
use crate::request::{Command, build_read_request, build_write_request};
use crate::retry::RetryPolicy;
use crate::row::Row;
use crate::value::Value;

/// How the client obtains backend engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    /// Create a fresh engine for every command.
    #[default]
    PerCall,
    /// Create one engine on first use and keep it for the client's lifetime.
    Reuse,
}

/// Client configuration.
///
/// Most users should use [`Client::builder()`] rather than constructing
/// this directly.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Retry policy applied to every response item (default: 3 failures)
    pub retry: RetryPolicy,
    /// Context every command is scoped to (default: the default context)
    pub context: ContextData,
    /// Engine lifecycle (default: fresh engine per command)
    pub engine_mode: EngineMode,
}

/// Blocking SNMP client over a protocol backend.
///
/// Each command builds its request, dispatches it to the backend and
/// drains the resulting source. Nothing is shared between commands unless
/// [`EngineMode::Reuse`] is selected.
pub struct Client<B: Backend> {
    backend: B,
    config: ClientConfig,
    engine: Option<B::Engine>,
}

impl<B: Backend> Client<B> {
    /// Create a client with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(backend: B, config: ClientConfig) -> Self {
        Self {
            backend,
            config,
            engine: None,
        }
    }

    /// Start building a client.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quicksnmp::{Client, MockBackend, RetryPolicy};
    ///
    /// let client = Client::builder(MockBackend::new())
    ///     .retry(RetryPolicy::once())
    ///     .reuse_engine(true)
    ///     .build();
    /// assert_eq!(client.config().retry.limit, 1);
    /// ```
    pub fn builder(backend: B) -> ClientBuilder<B> {
        ClientBuilder::new(backend)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drop the kept engine, if any. The next command creates a new one.
    pub fn reset_engine(&mut self) {
        self.engine = None;
    }

    /// GET the listed OIDs, returning the single response row.
    pub fn get<I>(
        &mut self,
        target: impl Into<Target>,
        oids: I,
        credentials: &B::Credentials,
    ) -> Result<Row>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let target = target.into();
        let command = Command::Get(build_read_request(oids));
        let rows = self.execute(&target, credentials, command, 1)?;
        single_row(rows)
    }

    /// SET each OID to its paired value, returning the response row.
    ///
    /// The row holds whatever the agent echoed back for each binding.
    pub fn set<I, K, V>(
        &mut self,
        target: impl Into<Target>,
        pairs: I,
        credentials: &B::Credentials,
    ) -> Result<Row>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let target = target.into();
        let command = Command::Set(build_write_request(pairs));
        let rows = self.execute(&target, credentials, command, 1)?;
        single_row(rows)
    }

    /// GETBULK `count` rows for the listed OIDs.
    ///
    /// `start_from` is the non-repeaters count: that many leading OIDs are
    /// fetched once, the rest are walked.
    pub fn get_bulk<I>(
        &mut self,
        target: impl Into<Target>,
        oids: I,
        credentials: &B::Credentials,
        count: u32,
        start_from: u32,
    ) -> Result<Vec<Row>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let target = target.into();
        if let Some(version) = credentials.version().filter(|v| !v.supports_bulk()) {
            tracing::warn!(target: "quicksnmp::client", peer = %target, %version, "GETBULK requested with credentials that do not support it");
        }
        let command = Command::GetBulk {
            non_repeaters: start_from,
            max_repetitions: count,
            objects: build_read_request(oids),
        };
        self.execute(&target, credentials, command, count as usize)
    }

    /// GETBULK with the row count read from `count_oid` first.
    ///
    /// Typical use is walking a table whose size is published in another
    /// object, e.g. `ifNumber` for `ifTable`.
    pub fn get_bulk_auto<I>(
        &mut self,
        target: impl Into<Target>,
        oids: I,
        credentials: &B::Credentials,
        count_oid: &str,
        start_from: u32,
    ) -> Result<Vec<Row>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let target = target.into();
        let row = self.get(&target, [count_oid], credentials)?;
        let count = bulk_count(&row, count_oid)?;
        tracing::debug!(target: "quicksnmp::client", peer = %target, count_oid, count, "resolved bulk row count");
        self.get_bulk(target, oids, credentials, count, start_from)
    }

    fn execute(
        &mut self,
        target: &Target,
        credentials: &B::Credentials,
        command: Command,
        expected: usize,
    ) -> Result<Vec<Row>> {
        tracing::debug!(target: "quicksnmp::client", peer = %target, pdu_type = %command.kind(), object_count = command.objects().len(), expected, "dispatching request");

        let request = Dispatch {
            target,
            credentials,
            context: &self.config.context,
            command,
        };

        // The engine must outlive the drain: sources send on pull.
        match self.config.engine_mode {
            EngineMode::PerCall => {
                let mut engine = self.backend.new_engine()?;
                let source = self.backend.dispatch(&mut engine, request)?;
                drain_with(source, expected, &self.config.retry)
            }
            EngineMode::Reuse => {
                let engine = match self.engine.take() {
                    Some(engine) => engine,
                    None => self.backend.new_engine()?,
                };
                let engine = self.engine.insert(engine);
                let source = self.backend.dispatch(engine, request)?;
                drain_with(source, expected, &self.config.retry)
            }
        }
    }
}

fn single_row(rows: Vec<Row>) -> Result<Row> {
    rows.into_iter().next().ok_or(Error::SourceExhausted {
        expected: 1,
        received: 0,
    })
}

/// Read the row count for an auto-counted GETBULK.
fn bulk_count(row: &Row, count_oid: &str) -> Result<u32> {
    match row.get(count_oid) {
        None => Err(Error::MissingCount {
            oid: count_oid.to_owned(),
        }),
        Some(value) => value
            .as_i64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| Error::InvalidCount {
                oid: count_oid.to_owned(),
                value: value.clone(),
            }),
    }
}

/// GET with a fresh engine and the default configuration.
///
/// # Example
///
/// ```rust
/// use quicksnmp::{Community, MockBackend, VarBind};
///
/// let mock = MockBackend::new();
/// mock.queue_varbinds(vec![VarBind::new("1.3.6.1.2.1.1.1.0", "Linux host")]);
///
/// let row = quicksnmp::get(&mock, "device1", ["1.3.6.1.2.1.1.1.0"], &Community::v2c("public"))
///     .unwrap();
/// assert_eq!(row.get("1.3.6.1.2.1.1.1.0").and_then(|v| v.as_str()), Some("Linux host"));
/// ```
pub fn get<B, I>(
    backend: &B,
    target: impl Into<Target>,
    oids: I,
    credentials: &B::Credentials,
) -> Result<Row>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    Client::new(backend).get(target, oids, credentials)
}

/// SET with a fresh engine and the default configuration.
pub fn set<B, I, K, V>(
    backend: &B,
    target: impl Into<Target>,
    pairs: I,
    credentials: &B::Credentials,
) -> Result<Row>
where
    B: Backend + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Client::new(backend).set(target, pairs, credentials)
}

/// GETBULK with a fresh engine and the default configuration.
pub fn get_bulk<B, I>(
    backend: &B,
    target: impl Into<Target>,
    oids: I,
    credentials: &B::Credentials,
    count: u32,
    start_from: u32,
) -> Result<Vec<Row>>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    Client::new(backend).get_bulk(target, oids, credentials, count, start_from)
}

/// Auto-counted GETBULK with fresh engines and the default configuration.
pub fn get_bulk_auto<B, I>(
    backend: &B,
    target: impl Into<Target>,
    oids: I,
    credentials: &B::Credentials,
    count_oid: &str,
    start_from: u32,
) -> Result<Vec<Row>>
where
    B: Backend + ?Sized,
    I: IntoIterator,
    I::Item: Into<String>,
{
    Client::new(backend).get_bulk_auto(target, oids, credentials, count_oid, start_from)
}
