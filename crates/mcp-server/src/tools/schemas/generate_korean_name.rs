use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `generate_korean_name` tool.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GenerateKoreanNameRequest {
    /// Keywords that flavour the given name (e.g. "봄", "바다", "용감한").
    /// Unknown keywords are accepted and fall back to the style pool.
    pub keywords: Vec<String>,

    /// Name style: cute | cool | elegant | funny | traditional (default: cute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Name style: cute | cool | elegant | funny | traditional")]
    pub style: Option<String>,

    /// Gender of the morpheme pool: male | female | any (default: any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Gender of the morpheme pool: male | female | any")]
    pub gender: Option<String>,

    /// How many names to generate; clamped to 1..=10 (default: 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "How many names to generate; clamped to 1..=10")]
    pub count: Option<i64>,
}
