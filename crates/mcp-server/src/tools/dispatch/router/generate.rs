use super::super::{CallToolResult, Content, GenerateKoreanNameRequest, McpError, NameService};
use super::error::{internal_error, name_error};
use crate::tools::text_doc::TextDocBuilder;
use korean_name_core::{NameRequest, Synthesizer};
use korean_name_protocol::GenerateNamesResult;

/// Generate a batch of names.
pub(in crate::tools::dispatch) async fn generate_korean_name(
    service: &NameService,
    request: GenerateKoreanNameRequest,
) -> Result<CallToolResult, McpError> {
    let request = match NameRequest::parse(
        request.keywords,
        request.style.as_deref(),
        request.gender.as_deref(),
        request.count,
        service.config(),
    ) {
        Ok(request) => request,
        Err(err) => return Ok(name_error(&err)),
    };

    let synthesizer = Synthesizer::with_config(service.lexicon(), service.config().clone());
    let names = {
        let mut rng = service.rng().lock().await;
        synthesizer.synthesize(&request, &mut *rng)
    };
    log::debug!(
        "generate_korean_name: {} names, style {}, gender {}",
        names.len(),
        request.style,
        request.gender
    );

    let result = GenerateNamesResult::new(&request, names, service.lexicon());

    let mut doc = TextDocBuilder::new();
    doc.push_answer(&result.message);
    for name in &result.names {
        doc.push_note(&format!("{} ({} + {})", name.full_name, name.family_name, name.given_name));
    }
    if !result.names.is_empty() {
        doc.push_note(&result.names[0].description);
    }

    let structured = match serde_json::to_value(&result) {
        Ok(value) => value,
        Err(err) => return Ok(internal_error(format!("Failed to encode result: {err}"))),
    };
    let mut output = CallToolResult::success(vec![Content::text(doc.finish())]);
    output.structured_content = Some(structured);
    Ok(output)
}
