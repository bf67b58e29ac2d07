//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use quicksnmp::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Client`], [`Target`], [`Value`], [`VarBind`], [`Row`], [`NativeValue`]
//! - Backend seam: [`Backend`], [`Credentials`], [`Community`]
//! - Error handling: [`Error`], [`Result`]
//! - Configuration: [`RetryPolicy`]

pub use crate::backend::{Backend, Community, Credentials, Target};
pub use crate::client::Client;
pub use crate::coerce::NativeValue;
pub use crate::error::{Error, Result};
pub use crate::retry::RetryPolicy;
pub use crate::row::Row;
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::version::Version;
