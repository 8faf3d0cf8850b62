#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Typed client for the Zabbix JSON-RPC API.
//!
//! [`ZbxClient`] carries the transport; every object in [`objects`] gets the
//! generic `get`, `get_by_id`, `create`, `update` and `delete` operations
//! through the [`Resource`] trait, plus a few lookups of its own.

mod wire;

pub mod config;
pub mod error;
pub mod objects;
pub mod telemetry;
pub mod types;
pub mod zbx_client;

pub use error::{Error, ZbxError};
pub use zbx_client::{ApiVersion, Params, Resource, ZbxClient};

pub type Result<T> = std::result::Result<T, error::Error>;
