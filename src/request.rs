//! Request construction.
//!
//! Builders turn caller input into the [`ObjectType`] units a backend
//! expects. They do no validation of their own: a malformed OID is the
//! backend's to reject.

use crate::value::Value;

/// One request unit: an OID, plus the value to write for SET.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    /// The object identifier, in dotted notation.
    pub oid: String,
    /// Value to assign (SET only).
    pub value: Option<Value>,
}

impl ObjectType {
    /// A read unit binding only the OID.
    pub fn read(oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            value: None,
        }
    }

    /// A write unit binding the OID and the value to assign.
    pub fn write(oid: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            oid: oid.into(),
            value: Some(value.into()),
        }
    }
}

/// Build read units (GET/GETBULK), one per OID, in input order.
///
/// # Examples
///
/// ```
/// use quicksnmp::build_read_request;
///
/// let units = build_read_request(["1.3.6.1.2.1.1.1.0", "1.3.6.1.2.1.1.5.0"]);
/// assert_eq!(units.len(), 2);
/// assert!(units.iter().all(|u| u.value.is_none()));
/// ```
pub fn build_read_request<I>(oids: I) -> Vec<ObjectType>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    oids.into_iter().map(ObjectType::read).collect()
}

/// Build write units (SET), one per pair, in iteration order.
///
/// # Examples
///
/// ```
/// use quicksnmp::{Value, build_write_request};
///
/// let units = build_write_request([("1.3.6.1.2.1.1.5.0", "core-sw-01")]);
/// assert_eq!(units[0].value, Some(Value::from("core-sw-01")));
/// ```
pub fn build_write_request<I, K, V>(pairs: I) -> Vec<ObjectType>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(oid, value)| ObjectType::write(oid, value))
        .collect()
}

/// PDU type of a command, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PduType {
    GetRequest,
    SetRequest,
    GetBulkRequest,
}

impl std::fmt::Display for PduType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetRequest => write!(f, "GetRequest"),
            Self::SetRequest => write!(f, "SetRequest"),
            Self::GetBulkRequest => write!(f, "GetBulkRequest"),
        }
    }
}

/// A command handed to a backend for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// GET the listed objects.
    Get(Vec<ObjectType>),
    /// SET the listed objects to their bound values.
    Set(Vec<ObjectType>),
    /// GETBULK: `non_repeaters` leading objects fetched once, the rest
    /// repeated up to `max_repetitions` times.
    GetBulk {
        non_repeaters: u32,
        max_repetitions: u32,
        objects: Vec<ObjectType>,
    },
}

impl Command {
    /// The PDU type this command is sent as.
    pub fn kind(&self) -> PduType {
        match self {
            Command::Get(_) => PduType::GetRequest,
            Command::Set(_) => PduType::SetRequest,
            Command::GetBulk { .. } => PduType::GetBulkRequest,
        }
    }

    /// The request units carried by this command.
    pub fn objects(&self) -> &[ObjectType] {
        match self {
            Command::Get(objects) | Command::Set(objects) => objects,
            Command::GetBulk { objects, .. } => objects,
        }
    }
}
