//! SNMP value types.
//!
//! The `Value` enum represents the typed values a protocol backend hands back
//! in a response (and accepts in a SET request).

use bytes::Bytes;

use crate::util::encode_hex;

/// SNMP value.
///
/// Represents the SMIv2 data types plus the exception values an agent may
/// return in place of a value.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// INTEGER / Integer32 (signed 32-bit)
    Integer(i32),

    /// OCTET STRING (arbitrary bytes)
    OctetString(Bytes),

    /// NULL
    Null,

    /// OBJECT IDENTIFIER, in dotted notation
    ObjectIdentifier(String),

    /// IpAddress (4 bytes, big-endian)
    IpAddress([u8; 4]),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),

    /// Gauge32 / Unsigned32 (unsigned 32-bit, non-wrapping)
    Gauge32(u32),

    /// TimeTicks (hundredths of seconds)
    TimeTicks(u32),

    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),

    /// Counter64 (unsigned 64-bit, wrapping). SNMPv2c/v3 only.
    Counter64(u64),

    /// noSuchObject exception
    NoSuchObject,

    /// noSuchInstance exception
    NoSuchInstance,

    /// endOfMibView exception
    EndOfMibView,

    /// Unknown/unrecognized value type (for forward compatibility)
    Unknown { tag: u8, data: Bytes },
}

impl Value {
    /// SMI name of this value's type.
    ///
    /// # Examples
    ///
    /// ```
    /// use quicksnmp::Value;
    ///
    /// assert_eq!(Value::TimeTicks(100).type_name(), "TimeTicks");
    /// assert_eq!(Value::from("eth0").type_name(), "OctetString");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::OctetString(_) => "OctetString",
            Value::Null => "Null",
            Value::ObjectIdentifier(_) => "ObjectIdentifier",
            Value::IpAddress(_) => "IpAddress",
            Value::Counter32(_) => "Counter32",
            Value::Gauge32(_) => "Gauge32",
            Value::TimeTicks(_) => "TimeTicks",
            Value::Opaque(_) => "Opaque",
            Value::Counter64(_) => "Counter64",
            Value::NoSuchObject => "NoSuchObject",
            Value::NoSuchInstance => "NoSuchInstance",
            Value::EndOfMibView => "EndOfMibView",
            Value::Unknown { .. } => "Unknown",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::OctetString(data) => {
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "0x{}", encode_hex(data))
                }
            }
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::IpAddress(addr) => {
                write!(f, "{}.{}.{}.{}", addr[0], addr[1], addr[2], addr[3])
            }
            Value::Counter32(v) => write!(f, "{}", v),
            Value::Gauge32(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => {
                let secs = v / 100;
                let days = secs / 86400;
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let s = secs % 60;
                write!(f, "{}d {}h {}m {}s", days, hours, mins, s)
            }
            Value::Opaque(data) => write!(f, "Opaque(0x{})", encode_hex(data)),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::NoSuchObject => write!(f, "noSuchObject"),
            Value::NoSuchInstance => write!(f, "noSuchInstance"),
            Value::EndOfMibView => write!(f, "endOfMibView"),
            Value::Unknown { tag, data } => {
                write!(f, "Unknown(tag=0x{:02X}, data=0x{})", tag, encode_hex(data))
            }
        }
    }
}

/// Convenience conversions so SET values can be written in native form.
///
/// # Examples
///
/// ```
/// use quicksnmp::Value;
///
/// assert_eq!(Value::from(42), Value::Integer(42));
/// assert_eq!(Value::from("core-sw-01").to_string(), "core-sw-01");
/// ```
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Value::OctetString(Bytes::copy_from_slice(data))
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::OctetString(Bytes::from(data))
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::OctetString(data)
    }
}

impl From<std::net::Ipv4Addr> for Value {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Value::IpAddress(addr.octets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_distinct() {
        let values = [
            Value::Integer(1),
            Value::OctetString(Bytes::from_static(b"x")),
            Value::Null,
            Value::ObjectIdentifier("1.3.6.1".into()),
            Value::IpAddress([10, 0, 0, 1]),
            Value::Counter32(1),
            Value::Gauge32(1),
            Value::TimeTicks(1),
            Value::Opaque(Bytes::from_static(b"\x00")),
            Value::Counter64(1),
            Value::NoSuchObject,
            Value::NoSuchInstance,
            Value::EndOfMibView,
            Value::Unknown {
                tag: 0x99,
                data: Bytes::new(),
            },
        ];
        let mut names: Vec<_> = values.iter().map(Value::type_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), values.len());
    }

    #[test]
    fn test_display_octet_string() {
        assert_eq!(Value::from("Linux host").to_string(), "Linux host");
        let binary = Value::OctetString(Bytes::from_static(&[0xff, 0x00, 0x1a]));
        assert_eq!(binary.to_string(), "0xff001a");
    }

    #[test]
    fn test_display_timeticks() {
        // 1 day, 2 hours, 3 minutes, 4 seconds
        let ticks = ((86400 + 2 * 3600 + 3 * 60 + 4) * 100) as u32;
        assert_eq!(Value::TimeTicks(ticks).to_string(), "1d 2h 3m 4s");
    }

    #[test]
    fn test_display_misc() {
        assert_eq!(Value::IpAddress([192, 168, 1, 1]).to_string(), "192.168.1.1");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::EndOfMibView.to_string(), "endOfMibView");
        assert_eq!(
            Value::Unknown {
                tag: 0x47,
                data: Bytes::from_static(&[0x01])
            }
            .to_string(),
            "Unknown(tag=0x47, data=0x01)"
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(-7), Value::Integer(-7));
        assert_eq!(
            Value::from(String::from("abc")),
            Value::OctetString(Bytes::from_static(b"abc"))
        );
        assert_eq!(
            Value::from(vec![1u8, 2]),
            Value::OctetString(Bytes::from_static(&[1, 2]))
        );
        assert_eq!(
            Value::from(std::net::Ipv4Addr::new(10, 1, 2, 3)),
            Value::IpAddress([10, 1, 2, 3])
        );
    }
}
