use super::super::{CallToolResult, Content, GetNameMeaningRequest, McpError, NameService};
use super::error::internal_error;
use crate::tools::text_doc::TextDocBuilder;
use korean_name_core::Interpreter;

/// Interpret a name. Any string is accepted.
pub(in crate::tools::dispatch) async fn get_name_meaning(
    service: &NameService,
    request: GetNameMeaningRequest,
) -> Result<CallToolResult, McpError> {
    let interpretation = Interpreter::new(service.lexicon()).interpret(&request.name);

    let mut doc = TextDocBuilder::new();
    doc.push_answer(&interpretation.interpretation);
    for gloss in &interpretation.meanings {
        doc.push_note(&format!("{}: {}", gloss.character, gloss.gloss));
    }

    let structured = match serde_json::to_value(&interpretation) {
        Ok(value) => value,
        Err(err) => return Ok(internal_error(format!("Failed to encode result: {err}"))),
    };
    let mut output = CallToolResult::success(vec![Content::text(doc.finish())]);
    output.structured_content = Some(structured);
    Ok(output)
}
