//! Protocol backend abstraction.
//!
//! quicksnmp does not speak SNMP on the wire itself. PDU encoding,
//! transport, retransmission and the security models live behind the
//! [`Backend`] trait; this crate only shapes requests and interprets the
//! responses a backend yields.

mod mock;

pub use mock::*;

use bytes::Bytes;

use crate::error::Result;
use crate::fetch::ResponseSource;
use crate::request::Command;
use crate::version::Version;

/// Default SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// A UDP endpoint to query.
///
/// # Examples
///
/// ```
/// use quicksnmp::Target;
///
/// let t = Target::from("192.0.2.10");
/// assert_eq!(t.port, 161);
///
/// let t = Target::from(("192.0.2.10", 1161));
/// assert_eq!(t.to_string(), "192.0.2.10:1161");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// Host name or address, passed to the backend as given.
    pub host: String,
    /// UDP port.
    pub port: u16,
}

impl Target {
    /// Target on the default port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl From<&str> for Target {
    fn from(host: &str) -> Self {
        Target::new(host)
    }
}

impl From<String> for Target {
    fn from(host: String) -> Self {
        Target::new(host)
    }
}

impl From<&Target> for Target {
    fn from(target: &Target) -> Self {
        target.clone()
    }
}

impl<H: Into<String>> From<(H, u16)> for Target {
    fn from((host, port): (H, u16)) -> Self {
        Target::new(host).with_port(port)
    }
}

/// SNMPv3 context a request is scoped to.
///
/// The default (no engine ID, empty name) is the default context and what
/// v1/v2c backends expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextData {
    /// contextEngineID; `None` lets the backend use the authoritative engine's ID.
    pub engine_id: Option<Bytes>,
    /// contextName.
    pub name: String,
}

impl ContextData {
    /// A named context.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            engine_id: None,
            name: name.into(),
        }
    }
}

/// Security parameters a backend authenticates requests with.
///
/// quicksnmp never looks inside credentials beyond [`version`]; it only
/// hands them to the backend. Implement this for whatever a backend needs
/// (community strings, USM users, ...).
///
/// [`version`]: Credentials::version
pub trait Credentials {
    /// Protocol version these credentials select, if they pin one.
    fn version(&self) -> Option<Version> {
        None
    }
}

/// Community-based credentials (SNMPv1/v2c).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub version: Version,
    pub community: Bytes,
}

impl Community {
    /// SNMPv1 community.
    pub fn v1(community: impl Into<Bytes>) -> Self {
        Self {
            version: Version::V1,
            community: community.into(),
        }
    }

    /// SNMPv2c community.
    pub fn v2c(community: impl Into<Bytes>) -> Self {
        Self {
            version: Version::V2c,
            community: community.into(),
        }
    }
}

impl Credentials for Community {
    fn version(&self) -> Option<Version> {
        Some(self.version)
    }
}

/// Everything a backend needs to start one exchange.
#[derive(Debug)]
pub struct Dispatch<'a, C: ?Sized> {
    pub target: &'a Target,
    pub credentials: &'a C,
    pub context: &'a ContextData,
    pub command: Command,
}

/// An SNMP protocol implementation.
///
/// # Engines
///
/// An engine is whatever per-session state the backend keeps (engine ID
/// discovery, request ID counters, sockets). The client asks for a fresh
/// one per call unless engine reuse is switched on, see
/// [`EngineMode`](crate::EngineMode).
///
/// # Laziness
///
/// [`dispatch`](Backend::dispatch) must not exchange anything with the
/// agent. The returned source sends a request when it is pulled, and
/// re-sends on the next pull after a failed response. A source that is
/// never pulled costs no traffic.
///
/// # Errors
///
/// Errors from `new_engine`, `dispatch` and from source items are returned
/// to the caller unchanged.
pub trait Backend {
    /// Credentials type accepted by this backend.
    type Credentials: crate::backend::Credentials + ?Sized;
    /// Per-session protocol state.
    type Engine;
    /// Response source returned by dispatch.
    type Responses: ResponseSource;

    /// Create a new engine.
    fn new_engine(&self) -> Result<Self::Engine>;

    /// Prepare a command for the target.
    fn dispatch(
        &self,
        engine: &mut Self::Engine,
        request: Dispatch<'_, Self::Credentials>,
    ) -> Result<Self::Responses>;
}

impl<B: Backend + ?Sized> Backend for &B {
    type Credentials = B::Credentials;
    type Engine = B::Engine;
    type Responses = B::Responses;

    fn new_engine(&self) -> Result<Self::Engine> {
        (**self).new_engine()
    }

    fn dispatch(
        &self,
        engine: &mut Self::Engine,
        request: Dispatch<'_, Self::Credentials>,
    ) -> Result<Self::Responses> {
        (**self).dispatch(engine, request)
    }
}
