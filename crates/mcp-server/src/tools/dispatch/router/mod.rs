// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod error;
pub(super) mod generate;
pub(super) mod keywords;
pub(super) mod meaning;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::NameService> {
    tool_router::build_tool_router()
}
