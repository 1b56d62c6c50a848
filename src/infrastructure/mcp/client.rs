use anyhow::{Context, Result};
use async_trait::async_trait;
use rmcp::{
    ServiceExt,
    model::{CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation, ProtocolVersion},
    service::{RoleClient, RunningService},
    transport::{SseClientTransport, StreamableHttpClientTransport},
};

use super::tools::{descriptor_from_tool, result_from_call};
use crate::domain::config::{ClientConfig, ServerConfig, TransportKind};
use crate::domain::traits::{SessionConnector, ToolSession};
use crate::domain::types::{CapabilityDescriptor, InvocationRequest, InvocationResult};
use crate::strings::logs;

/// Opens MCP sessions over SSE or streamable HTTP.
pub struct McpConnector {
    transport: TransportKind,
    endpoint: String,
    client_name: String,
    client_version: String,
}

impl McpConnector {
    /// Create a connector for the configured server
    ///
    /// # Arguments
    /// * `server` - Transport and endpoint of the MCP server
    /// * `client` - Name and version announced in the initialize handshake
    pub fn new(server: &ServerConfig, client: &ClientConfig) -> Self {
        Self {
            transport: server.transport,
            endpoint: server.endpoint.clone(),
            client_name: client.name.clone(),
            client_version: client.version.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> TransportKind {
        self.transport
    }

    fn client_info(&self) -> ClientInfo {
        ClientInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: self.client_name.clone(),
                version: self.client_version.clone(),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl SessionConnector for McpConnector {
    async fn connect(&self) -> Result<Box<dyn ToolSession>> {
        tracing::info!("{}", logs::connecting(&self.endpoint, self.transport));

        let service = match self.transport {
            TransportKind::Sse => {
                let transport = SseClientTransport::start(self.endpoint.as_str())
                    .await
                    .with_context(|| logs::connect_fail(&self.endpoint))?;
                self.client_info()
                    .serve(transport)
                    .await
                    .with_context(|| logs::connect_fail(&self.endpoint))?
            }
            TransportKind::StreamableHttp => {
                let transport = StreamableHttpClientTransport::from_uri(self.endpoint.as_str());
                self.client_info()
                    .serve(transport)
                    .await
                    .with_context(|| logs::connect_fail(&self.endpoint))?
            }
        };

        match service.peer_info() {
            Some(info) => tracing::info!(
                "{}",
                logs::connected(&info.server_info.name, &info.server_info.version)
            ),
            None => tracing::info!("{}", logs::CONNECTED_NO_INFO),
        }

        Ok(Box::new(McpSession {
            service: Some(service),
        }))
    }
}

/// A live MCP client session.
///
/// The rmcp service runs on a background task until [`ToolSession::close`]
/// cancels it.
pub struct McpSession {
    service: Option<RunningService<RoleClient, ClientInfo>>,
}

impl McpSession {
    fn service(&self) -> Result<&RunningService<RoleClient, ClientInfo>> {
        self.service
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!(logs::SESSION_ALREADY_CLOSED))
    }
}

#[async_trait]
impl ToolSession for McpSession {
    async fn list_capabilities(&self) -> Result<Vec<CapabilityDescriptor>> {
        let tools = self
            .service()?
            .list_all_tools()
            .await
            .context(logs::LIST_TOOLS_FAIL)?;

        Ok(tools.into_iter().map(descriptor_from_tool).collect())
    }

    async fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult> {
        let result = self
            .service()?
            .call_tool(CallToolRequestParam {
                name: request.name.clone().into(),
                arguments: Some(request.arguments.clone()),
            })
            .await
            .with_context(|| logs::invoke_fail(&request.name))?;

        Ok(result_from_call(result))
    }

    async fn close(&mut self) -> Result<()> {
        let Some(service) = self.service.take() else {
            return Ok(());
        };

        let reason = service.cancel().await.context(logs::CLOSE_FAIL)?;
        tracing::debug!("{} ({:?})", logs::SESSION_CLOSED, reason);
        Ok(())
    }
}
