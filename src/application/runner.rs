//! # Session Runner
//!
//! Drives one client session: connect, list tools, ask for weather alerts,
//! ask for the forecast, and print everything. The connection is always
//! closed before `run` returns, whether the sequence succeeded or not.

use anyhow::{Context, Result, bail};
use std::io::Write;

use super::report;
use crate::domain::config::{AlertsConfig, ForecastConfig};
use crate::domain::traits::{SessionConnector, ToolSession};
use crate::domain::types::InvocationRequest;
use crate::strings::{logs, messages};

pub struct SessionRunner {
    alerts: AlertsConfig,
    forecast: ForecastConfig,
}

impl SessionRunner {
    pub fn new(alerts: AlertsConfig, forecast: ForecastConfig) -> Self {
        Self { alerts, forecast }
    }

    /// Run the full sequence, writing the report to `out`.
    ///
    /// # Errors
    /// Returns the first failure: connection, tool listing, either tool call
    /// (including a result the server flags as an error), an unusable result,
    /// or closing the session. When a step fails and the
    /// close fails as well, the step's error wins and the close error is logged.
    pub async fn run<C, W>(&self, connector: &C, out: &mut W) -> Result<()>
    where
        C: SessionConnector + ?Sized,
        W: Write,
    {
        let mut session = connector.connect().await?;

        let outcome = self.drive(session.as_ref(), out).await;
        let closed = session.close().await;

        match (outcome, closed) {
            (Ok(()), Ok(())) => {
                tracing::info!("{}", logs::FINISHED);
                Ok(())
            }
            (Ok(()), Err(err)) => Err(err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                tracing::warn!("{}", logs::close_fail_after_error(&format!("{close_err:#}")));
                Err(err)
            }
        }
    }

    async fn drive<W: Write>(&self, session: &dyn ToolSession, out: &mut W) -> Result<()> {
        let tools = session.list_capabilities().await?;
        tracing::info!("{}", logs::tools_listed(tools.len()));
        report::write_tools(out, &tools)?;

        let alerts = self.call(session, &alerts_request(&self.alerts)).await?;
        report::write_section(out, &messages::alerts_heading(&self.alerts.state), &alerts)?;

        let forecast = self.call(session, &forecast_request(&self.forecast)).await?;
        report::write_section(
            out,
            &messages::forecast_heading(self.forecast.latitude, self.forecast.longitude),
            &forecast,
        )?;

        Ok(())
    }

    /// Invoke a tool and return the text of its first result item.
    /// A result flagged `is_error` fails with the tool's own message.
    async fn call(&self, session: &dyn ToolSession, request: &InvocationRequest) -> Result<String> {
        tracing::debug!("{}", logs::invoking(&request.name));
        let result = session.invoke(request).await?;

        if result.is_error {
            let detail = result.first_text().unwrap_or("no details");
            bail!(logs::tool_reported_error(&request.name, detail));
        }

        let text = result
            .first_text()
            .with_context(|| logs::unexpected_result(&request.name))?;
        Ok(text.to_string())
    }
}

pub fn alerts_request(alerts: &AlertsConfig) -> InvocationRequest {
    InvocationRequest::new(&alerts.tool).with_arg("state", alerts.state.as_str())
}

pub fn forecast_request(forecast: &ForecastConfig) -> InvocationRequest {
    InvocationRequest::new(&forecast.tool)
        .with_arg("latitude", forecast.latitude)
        .with_arg("longitude", forecast.longitude)
}
