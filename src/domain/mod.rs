//! # Domain Layer
//!
//! Configuration, data types and the connection traits the rest of the client is written against.

pub mod config;
pub mod traits;
pub mod types;
