//! The fetch loop: draining a response source into result rows.
//!
//! A backend hands back a single-use, pull-based source of [`Response`]s.
//! [`drain`] pulls exactly as many successful responses as the command
//! expects, re-pulling on protocol errors until the [`RetryPolicy`] budget
//! for that item runs out.

use crate::coerce::coerce;
use crate::error::{Error, ErrorStatus, Result};
use crate::retry::RetryPolicy;
use crate::row::Row;
use crate::varbind::VarBind;

/// One response as reported by a backend.
///
/// Mirrors the four-part result of an SNMP exchange: a transport-level
/// indication, the PDU error status and index, and the variable bindings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// Transport or engine level failure (timeout, unknown user, ...).
    pub error_indication: Option<String>,
    /// PDU error status.
    pub error_status: ErrorStatus,
    /// 1-based index of the offending binding, 0 if none.
    pub error_index: u32,
    /// Bindings in the order the agent returned them.
    pub varbinds: Vec<VarBind>,
}

impl Response {
    /// A successful response carrying `varbinds`.
    pub fn ok(varbinds: Vec<VarBind>) -> Self {
        Self {
            varbinds,
            ..Self::default()
        }
    }

    /// A failed response with only a transport-level indication.
    pub fn indication(indication: impl Into<String>) -> Self {
        Self {
            error_indication: Some(indication.into()),
            ..Self::default()
        }
    }

    /// A failed response with a PDU error status.
    pub fn status(status: ErrorStatus, index: u32) -> Self {
        Self {
            error_status: status,
            error_index: index,
            ..Self::default()
        }
    }

    /// Whether any of the three error signals is set.
    pub fn is_error(&self) -> bool {
        self.error_indication.is_some() || self.error_status.is_error() || self.error_index != 0
    }

    /// Coerce every binding into a row.
    pub fn to_row(&self) -> Result<Row> {
        let mut row = Row::with_capacity(self.varbinds.len());
        for vb in &self.varbinds {
            row.insert(vb.oid.as_str(), coerce(&vb.value)?);
        }
        Ok(row)
    }

    fn into_error(self, attempts: u32) -> Error {
        Error::Protocol {
            indication: self.error_indication,
            status: self.error_status,
            index: self.error_index,
            attempts,
        }
    }
}

/// A single-use, pull-based source of responses.
///
/// Any iterator of `Result<Response>` qualifies. An `Err` item is a backend
/// failure and aborts the drain unchanged; a failed [`Response`] is retried.
pub trait ResponseSource: Iterator<Item = Result<Response>> {}

impl<I: Iterator<Item = Result<Response>>> ResponseSource for I {}

/// Drain `expected` rows from `source` with the default [`RetryPolicy`].
///
/// # Examples
///
/// ```
/// use quicksnmp::{Response, VarBind, drain};
///
/// let source = vec![
///     Ok(Response::indication("requestTimedOut")),
///     Ok(Response::ok(vec![VarBind::new("1.3.6.1.2.1.1.5.0", "sw1")])),
/// ];
/// let rows = drain(source.into_iter(), 1).unwrap();
/// assert_eq!(rows[0].get("1.3.6.1.2.1.1.5.0").and_then(|v| v.as_str()), Some("sw1"));
/// ```
pub fn drain<S: ResponseSource>(source: S, expected: usize) -> Result<Vec<Row>> {
    drain_with(source, expected, &RetryPolicy::default())
}

/// Drain `expected` rows from `source`, retrying failed items per `retry`.
///
/// The source is not touched at all when `expected` is zero. Each item
/// has its own failure counter; once it reaches the policy's limit the
/// whole call fails with [`Error::Protocol`] and no further items are
/// pulled. Coercion failures and backend errors are never retried.
pub fn drain_with<S: ResponseSource>(
    mut source: S,
    expected: usize,
    retry: &RetryPolicy,
) -> Result<Vec<Row>> {
    // `expected` may come from the agent (auto-counted GETBULK); rows are
    // only allocated as responses arrive.
    let mut rows = Vec::new();

    for item in 0..expected {
        let mut failures = 0u32;
        loop {
            let response = match source.next() {
                Some(response) => response?,
                None => {
                    return Err(Error::SourceExhausted {
                        expected,
                        received: rows.len(),
                    });
                }
            };

            if !response.is_error() {
                rows.push(response.to_row()?);
                break;
            }

            failures += 1;
            let indication = response.error_indication.as_deref().unwrap_or("none");
            if retry.is_exhausted(failures) {
                tracing::debug!(target: "quicksnmp::fetch", item, attempts = failures, indication, status = %response.error_status, index = response.error_index, "retry budget exhausted");
                return Err(response.into_error(failures));
            }

            tracing::warn!(target: "quicksnmp::fetch", item, attempt = failures, indication, status = %response.error_status, index = response.error_index, "retrying after SNMP error");
            if !retry.delay.is_zero() {
                std::thread::sleep(retry.delay);
            }
        }
    }

    Ok(rows)
}
