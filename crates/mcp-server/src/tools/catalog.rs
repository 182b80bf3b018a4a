use korean_name_protocol::SERVER_NAME;
use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "generate_korean_name",
        summary: "Synthesize Korean names from keywords, style, gender and count (1-10).",
    },
    ToolDescriptor {
        name: "get_name_meaning",
        summary: "Split a name into family/given parts and gloss each given-name character.",
    },
    ToolDescriptor {
        name: "suggest_name_keywords",
        summary: "Keyword categories, styles and genders accepted by generate_korean_name.",
    },
];

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = TOOL_CATALOG
        .iter()
        .map(|tool| json!({ "name": tool.name, "summary": tool.summary }))
        .collect();

    json!({
        "binary": SERVER_NAME,
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Korean Name Generator creates Korean personal names from keywords and explains name meanings."
            .to_string(),
        "Recommended flow: suggest_name_keywords → generate_korean_name → get_name_meaning."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
