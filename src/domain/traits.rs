//! # Domain Traits
//!
//! Abstract interfaces for the tool server connection.
//! The MCP client implements them in the Infrastructure layer; tests swap in fakes.

use anyhow::Result;
use async_trait::async_trait;

use super::types::{CapabilityDescriptor, InvocationRequest, InvocationResult};

/// An open connection to a tool server.
#[async_trait]
pub trait ToolSession: Send + Sync {
    /// List every tool the server advertises
    async fn list_capabilities(&self) -> Result<Vec<CapabilityDescriptor>>;

    /// Call a tool and wait for its result
    async fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult>;

    /// Release the connection. Called exactly once, after which the session is dropped.
    async fn close(&mut self) -> Result<()>;
}

/// Opens [`ToolSession`]s.
#[async_trait]
pub trait SessionConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn ToolSession>>;
}
