use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `suggest_name_keywords` tool. Takes no parameters.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct SuggestNameKeywordsRequest {}
