//! Request-scoped diagnostics.
//!
//! Each tool invocation gets one handle, correlated to the invoking request
//! through the client peer. Messages are forwarded to the connected client
//! as MCP logging notifications (best-effort) and always mirrored to
//! `tracing`; a notification that cannot be delivered never fails the
//! invocation.

use rmcp::RoleServer;
use rmcp::model::{LoggingLevel, LoggingMessageNotificationParam};
use rmcp::service::Peer;
use serde_json::json;

pub struct Diagnostics {
    logger: &'static str,
    peer: Option<Peer<RoleServer>>,
}

impl Diagnostics {
    /// A handle bound to the peer of the invoking request. `logger` is the
    /// operation name and becomes the notification's logger field.
    #[must_use]
    pub fn new(logger: &'static str, peer: Peer<RoleServer>) -> Self {
        Self {
            logger,
            peer: Some(peer),
        }
    }

    /// A handle with no client attached; messages only reach `tracing`.
    #[must_use]
    pub fn detached(logger: &'static str) -> Self {
        Self { logger, peer: None }
    }

    pub async fn info(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(tool = self.logger, "{message}");
        self.notify(LoggingLevel::Info, message).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(tool = self.logger, "{message}");
        self.notify(LoggingLevel::Error, message).await;
    }

    async fn notify(&self, level: LoggingLevel, message: String) {
        let Some(peer) = &self.peer else {
            return;
        };

        let params = LoggingMessageNotificationParam {
            level,
            logger: Some(self.logger.to_string()),
            data: json!({ "message": message }),
        };
        if let Err(e) = peer.notify_logging_message(params).await {
            tracing::debug!(
                tool = self.logger,
                error = %e,
                "failed to forward diagnostic to client"
            );
        }
    }
}
