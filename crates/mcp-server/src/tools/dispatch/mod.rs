//! MCP tool dispatch for the Korean name generator.

use super::schemas::generate_korean_name::GenerateKoreanNameRequest;
use super::schemas::get_name_meaning::GetNameMeaningRequest;
use super::schemas::suggest_name_keywords::SuggestNameKeywordsRequest;
use korean_name_core::{Lexicon, NameConfig};
use rand::rngs::StdRng;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use std::sync::Arc;
use tokio::sync::Mutex;

mod router;
mod service;

/// Korean name MCP service
#[derive(Clone)]
pub struct NameService {
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// Shared generation state (per-process)
    state: Arc<ServiceState>,
}

struct ServiceState {
    lexicon: &'static Lexicon,
    config: NameConfig,
    /// Single stream for the process; a fixed seed makes the whole call sequence reproducible.
    rng: Mutex<StdRng>,
}

impl ServiceState {
    fn new(lexicon: &'static Lexicon, config: NameConfig) -> Self {
        let rng = Mutex::new(config.rng());
        Self {
            lexicon,
            config,
            rng,
        }
    }
}

impl NameService {
    pub(in crate::tools::dispatch) fn lexicon(&self) -> &'static Lexicon {
        self.state.lexicon
    }

    pub(in crate::tools::dispatch) fn config(&self) -> &NameConfig {
        &self.state.config
    }

    pub(in crate::tools::dispatch) fn rng(&self) -> &Mutex<StdRng> {
        &self.state.rng
    }
}

#[cfg(test)]
impl NameService {
    pub(in crate::tools::dispatch) fn seeded(seed: u64) -> Self {
        Self::with_config(NameConfig {
            seed: Some(seed),
            ..NameConfig::default()
        })
    }
}

#[cfg(test)]
mod tests;
