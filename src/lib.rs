//! # quicksnmp
//!
//! Blocking convenience layer for SNMP GET, SET and GETBULK.
//!
//! quicksnmp does not implement the SNMP wire protocol. A [`Backend`]
//! supplies engines, transport and security handling; this crate builds the
//! requests, drains the backend's responses with a bounded per-item retry,
//! and coerces every returned value into a [`NativeValue`] (string, integer
//! or float).
//!
//! ## Quick Start
//!
//! ```rust
//! use quicksnmp::{Client, Community, MockBackend, NativeValue, Value, VarBind};
//!
//! # fn main() -> quicksnmp::Result<()> {
//! // Any Backend works here; the mock replays scripted responses.
//! let backend = MockBackend::new();
//! backend.queue_varbinds(vec![
//!     VarBind::new("1.3.6.1.2.1.1.1.0", "Linux host"),
//!     VarBind::new("1.3.6.1.2.1.1.3.0", Value::TimeTicks(360_000)),
//! ]);
//!
//! let mut client = Client::new(backend);
//! let row = client.get(
//!     "192.0.2.1",
//!     ["1.3.6.1.2.1.1.1.0", "1.3.6.1.2.1.1.3.0"],
//!     &Community::v2c("public"),
//! )?;
//!
//! assert_eq!(row.get("1.3.6.1.2.1.1.1.0"), Some(&NativeValue::from("Linux host")));
//! assert_eq!(row.get("1.3.6.1.2.1.1.3.0"), Some(&NativeValue::Float(360_000.0)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Retries
//!
//! A response carrying an error indication, status or index is re-pulled
//! from the same source. After three failures for one item (configurable
//! through [`RetryPolicy`]) the call fails with [`Error::Protocol`]. Every
//! retry is reported as a `tracing` WARN event on target `quicksnmp::fetch`.

pub mod backend;
pub mod client;
pub mod coerce;
pub mod error;
pub mod fetch;
pub mod prelude;
pub mod request;
pub mod retry;
pub mod row;
pub mod value;
pub mod varbind;
pub mod version;

pub(crate) mod util;

// Re-exports for convenience
pub use backend::{
    Backend, Community, ContextData, Credentials, DEFAULT_PORT, Dispatch, MockBackend,
    MockReply, Target,
};
pub use client::{
    Client, ClientBuilder, ClientConfig, EngineMode, get, get_bulk, get_bulk_auto, set,
};
pub use coerce::{Coerce, NativeValue, coerce};
pub use error::{BoxError, Error, ErrorStatus, Result};
pub use fetch::{Response, ResponseSource, drain, drain_with};
pub use request::{Command, ObjectType, PduType, build_read_request, build_write_request};
pub use retry::{RETRY_LIMIT, RetryPolicy};
pub use row::Row;
pub use value::Value;
pub use varbind::VarBind;
pub use version::Version;
