use super::super::{CallToolResult, Content};
use crate::tools::text_doc::TextDocBuilder;
use korean_name_core::NameError;
use korean_name_protocol::ErrorEnvelope;
use serde_json::json;

fn render_details_notes(details: &serde_json::Value) -> Vec<String> {
    match details {
        serde_json::Value::Object(map) => {
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            keys.into_iter()
                .filter_map(|key| map.get(key).map(|value| (key, value)))
                .map(|(key, value)| match value {
                    serde_json::Value::String(s) => format!("details.{key}={s}"),
                    other => format!("details.{key}={other}"),
                })
                .collect()
        }
        other => vec![format!("details={other}")],
    }
}

pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut doc = TextDocBuilder::new();
    doc.push_answer(&format!("error: {}", error.code));
    doc.push_note(&error.message);
    if let Some(hint) = error.hint.as_deref() {
        if !hint.trim().is_empty() {
            doc.push_note(&format!("hint: {hint}"));
        }
    }
    if let Some(details) = error.details.as_ref() {
        for line in render_details_notes(details) {
            doc.push_note(&line);
        }
    }

    let mut result = CallToolResult::error(vec![Content::text(doc.finish())]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn name_error(err: &NameError) -> CallToolResult {
    log::debug!("Rejecting tool call: {err}");
    tool_error_envelope(ErrorEnvelope::from(err))
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    tool_error_envelope(ErrorEnvelope::new("internal", message))
}
