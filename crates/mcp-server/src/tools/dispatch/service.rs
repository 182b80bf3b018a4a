use super::{router, NameService, ServiceState};
use crate::tools::catalog;
use korean_name_core::{default_lexicon, NameConfig};
use korean_name_protocol::SERVER_NAME;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;

impl NameService {
    pub fn new() -> Self {
        Self::with_config(NameConfig::default())
    }

    pub fn with_config(config: NameConfig) -> Self {
        log::debug!(
            "Name service config: counts {}..={} (default {}), style {}, gender {}, seeded {}",
            config.min_count,
            config.max_count,
            config.default_count,
            config.default_style,
            config.default_gender,
            config.seed.is_some()
        );
        Self {
            tool_router: router::build_tool_router(),
            state: Arc::new(ServiceState::new(default_lexicon(), config)),
        }
    }
}

impl Default for NameService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for NameService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
