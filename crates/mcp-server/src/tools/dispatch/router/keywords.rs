use super::super::{CallToolResult, Content, McpError, NameService, SuggestNameKeywordsRequest};
use super::error::internal_error;
use crate::tools::text_doc::TextDocBuilder;
use korean_name_protocol::KeywordSuggestions;

pub(in crate::tools::dispatch) async fn suggest_name_keywords(
    service: &NameService,
    _request: SuggestNameKeywordsRequest,
) -> Result<CallToolResult, McpError> {
    let suggestions = KeywordSuggestions::from_lexicon(service.lexicon());

    let mut doc = TextDocBuilder::new();
    doc.push_answer(&format!(
        "suggest_name_keywords: {} keywords in {} categories",
        suggestions.total_keywords,
        suggestions.categories.len()
    ));
    for (category, keywords) in &suggestions.categories {
        doc.push_note(&format!("{category}: {}", keywords.join(", ")));
    }
    doc.push_blank();
    doc.push_note(&suggestions.usage_tip);

    let structured = match serde_json::to_value(&suggestions) {
        Ok(value) => value,
        Err(err) => return Ok(internal_error(format!("Failed to encode result: {err}"))),
    };
    let mut output = CallToolResult::success(vec![Content::text(doc.finish())]);
    output.structured_content = Some(structured);
    Ok(output)
}
