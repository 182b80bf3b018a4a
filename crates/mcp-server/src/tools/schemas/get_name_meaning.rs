use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `get_name_meaning` tool.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetNameMeaningRequest {
    /// Full name, family name first (e.g. "김봄이")
    pub name: String,
}
