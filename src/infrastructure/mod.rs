//! # Infrastructure Layer
//!
//! Handles interactions with external systems.
//! Implements the traits defined in the Domain layer (`SessionConnector`, `ToolSession`).

pub mod mcp;
