//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a value.

use crate::value::Value;

/// Variable binding - an OID-value pair as returned in a response.
#[derive(Debug, Clone, PartialEq)]
pub struct VarBind {
    /// The object identifier, in dotted notation.
    pub oid: String,
    /// The value.
    pub value: Value,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}
