//! # MCP Module
//!
//! Model Context Protocol client built on rmcp.
//! Includes the session implementation and the conversions from rmcp types.

pub mod client;
pub mod tools;

pub use client::McpConnector;
