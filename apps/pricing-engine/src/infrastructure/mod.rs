//! Infrastructure Layer
//!
//! Driver and driven adapters: the HTTP surface and the configuration
//! store implementation.

pub mod http;
pub mod persistence;
