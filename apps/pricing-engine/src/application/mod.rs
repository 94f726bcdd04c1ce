//! Application Layer
//!
//! Use cases orchestrating the domain, and the DTOs crossing the API
//! boundary.

pub mod dto;
pub mod use_cases;
