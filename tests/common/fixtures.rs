//! Common test fixtures and constants.

use quicksnmp::{Community, Response, Value, VarBind};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub const SYS_DESCR: &str = "1.3.6.1.2.1.1.1.0";
pub const SYS_OBJECT_ID: &str = "1.3.6.1.2.1.1.2.0";
pub const SYS_UPTIME: &str = "1.3.6.1.2.1.1.3.0";
pub const SYS_CONTACT: &str = "1.3.6.1.2.1.1.4.0";
pub const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";
pub const SYS_LOCATION: &str = "1.3.6.1.2.1.1.6.0";

// =============================================================================
// Interfaces MIB (1.3.6.1.2.1.2.*)
// =============================================================================

/// ifNumber.0: number of rows in ifTable
pub const IF_NUMBER: &str = "1.3.6.1.2.1.2.1.0";
/// ifDescr column
pub const IF_DESCR: &str = "1.3.6.1.2.1.2.2.1.2";
/// ifInOctets column
pub const IF_IN_OCTETS: &str = "1.3.6.1.2.1.2.2.1.10";

// =============================================================================
// Credentials
// =============================================================================

pub fn public() -> Community {
    Community::v2c("public")
}

pub fn private() -> Community {
    Community::v2c("private")
}

// =============================================================================
// Response helpers
// =============================================================================

pub fn timed_out() -> Response {
    Response::indication("requestTimedOut")
}

/// One ifTable row: ifDescr.N and ifInOctets.N
pub fn if_row(index: u32, descr: &str, in_octets: u32) -> Response {
    Response::ok(vec![
        VarBind::new(format!("{}.{}", IF_DESCR, index), descr),
        VarBind::new(
            format!("{}.{}", IF_IN_OCTETS, index),
            Value::Counter32(in_octets),
        ),
    ])
}
