//! The MCP service surface: tool registry and server metadata.
//!
//! Every tool method is a thin declaration: build the call description from
//! its typed arguments, attach a diagnostics handle for the invoking
//! request, and hand both to the shared gateway. The gateway never returns
//! an error — remote failures come back as error envelopes — so tool
//! results are always successful `CallToolResult`s carrying the envelope as
//! JSON text.

use quads_tools::catalog::{
    self, ActiveAssignmentFilter, AvailabilityFilters, HostAvailabilityArgs, HostDetailsArgs,
    HostFilters, LoginArgs, MoveFilters, ScheduleFilters,
};
use quads_tools::diagnostics::Diagnostics;
use quads_tools::runtime::{QuadsGateway, ToolCall};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::service::Peer;
use rmcp::{ErrorData, RoleServer, ServerHandler, tool, tool_handler, tool_router};
use serde_json::Value;

#[derive(Clone)]
pub struct QuadsService {
    gateway: QuadsGateway,
    tool_router: ToolRouter<Self>,
}

impl QuadsService {
    #[must_use]
    pub fn new(gateway: QuadsGateway) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }

    async fn dispatch(
        &self,
        peer: Peer<RoleServer>,
        call: ToolCall,
    ) -> Result<CallToolResult, ErrorData> {
        let diagnostics = Diagnostics::new(call.name, peer);
        let envelope = self.gateway.invoke(call, &diagnostics).await;
        Ok(envelope_result(&envelope))
    }
}

fn envelope_result(envelope: &Value) -> CallToolResult {
    let text = serde_json::to_string(envelope).unwrap_or_else(|_| envelope.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl QuadsService {
    #[tool(
        description = "Login to the QUADS API and get an authentication token.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = true
        )
    )]
    async fn quads_login(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<LoginArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::login(&args)).await
    }

    #[tool(
        description = "Get all defined clouds from QUADS.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_clouds(
        &self,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::clouds()).await
    }

    #[tool(
        description = "Get all free clouds available for new assignments.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_free_clouds(
        &self,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::free_clouds()).await
    }

    #[tool(
        description = "Get hosts from QUADS, optionally filtered by name, model, type, or broken status.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_hosts(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<HostFilters>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::hosts(&args)).await
    }

    #[tool(
        description = "Get detailed information about a specific host, including hardware specs.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_host_details(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<HostDetailsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::host_details(&args)).await
    }

    #[tool(
        description = "Get available hosts for a time period (YYYY-MM-DD dates), optionally filtered by cloud.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_available_hosts(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<AvailabilityFilters>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::available_hosts(&args)).await
    }

    #[tool(
        description = "Check whether a specific host is available for a time period (YYYY-MM-DD dates).",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_check_host_availability(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<HostAvailabilityArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::host_availability(&args)).await
    }

    #[tool(
        description = "Get all defined schedules from QUADS.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_schedules(
        &self,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::schedules()).await
    }

    #[tool(
        description = "Get current schedules, optionally filtered by date, host, or cloud.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_current_schedules(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<ScheduleFilters>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::current_schedules(&args)).await
    }

    #[tool(
        description = "Get all assignments from QUADS.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_assignments(
        &self,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::assignments()).await
    }

    #[tool(
        description = "Get active assignments, optionally restricted to a specific cloud.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_active_assignments(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<ActiveAssignmentFilter>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::active_assignments(&args)).await
    }

    #[tool(
        description = "Get host moves/transitions, optionally for a specific date (YYYY-MM-DD).",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_moves(
        &self,
        peer: Peer<RoleServer>,
        Parameters(args): Parameters<MoveFilters>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::moves(&args)).await
    }

    #[tool(
        description = "Get QUADS version information.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn quads_get_version(
        &self,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(peer, catalog::version()).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for QuadsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_logging()
                .build(),
            server_info: Implementation {
                name: "quads-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP tools for the QUADS lab-reservation API: browse clouds, hosts, \
                     schedules, and assignments, and check host availability."
                        .to_string(),
                ),
                ..Implementation::default()
            },
            instructions: Some(
                "Browse the QUADS lab scheduler. Use quads_get_clouds / \
                 quads_get_free_clouds for cloud inventory, quads_get_hosts and \
                 quads_get_host_details for hardware, quads_get_available_hosts and \
                 quads_check_host_availability for reservation windows (dates are \
                 YYYY-MM-DD), quads_get_schedules / quads_get_current_schedules / \
                 quads_get_assignments / quads_get_active_assignments / quads_get_moves \
                 for scheduling state, and quads_login to obtain an auth token. Every \
                 tool returns a JSON envelope; failures carry an `error` key instead of \
                 the data key."
                    .to_string(),
            ),
            ..ServerInfo::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QuadsService;

    #[test]
    fn tool_router_lists_every_operation() {
        let router = QuadsService::tool_router();
        let mut names: Vec<String> = router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "quads_check_host_availability",
                "quads_get_active_assignments",
                "quads_get_assignments",
                "quads_get_available_hosts",
                "quads_get_clouds",
                "quads_get_current_schedules",
                "quads_get_free_clouds",
                "quads_get_host_details",
                "quads_get_hosts",
                "quads_get_moves",
                "quads_get_schedules",
                "quads_get_version",
                "quads_login",
            ]
        );
    }

    #[test]
    fn read_only_hints_follow_http_method() {
        let router = QuadsService::tool_router();
        for tool in router.list_all() {
            let annotations = tool.annotations.as_ref().expect("annotations");
            let read_only = annotations.read_only_hint.expect("read_only_hint");
            if tool.name == "quads_login" {
                assert!(!read_only);
            } else {
                assert!(read_only, "{} should be read-only", tool.name);
            }
        }
    }
}
