use super::super::*;
use super::text_of;
use korean_name_core::{SHORT_NAME_GLOSS, UNKNOWN_CHARACTER_GLOSS};
use rmcp::handler::server::wrapper::Parameters;

async fn meaning(name: &str) -> CallToolResult {
    NameService::seeded(0)
        .get_name_meaning(Parameters(GetNameMeaningRequest {
            name: name.to_string(),
        }))
        .await
        .expect("tool call")
}

#[tokio::test]
async fn meaning_glosses_each_given_character() {
    let result = meaning("김봄이").await;
    assert_ne!(result.is_error, Some(true));
    let payload = result.structured_content.clone().expect("structured content");
    assert_eq!(payload["family_name"], "김");
    assert_eq!(payload["given_name"], "봄이");
    assert_eq!(payload["meanings"][0]["character"], "봄");
    assert_eq!(payload["meanings"][0]["gloss"], "봄, 생명력");
    assert_eq!(payload["meanings"][1]["gloss"], UNKNOWN_CHARACTER_GLOSS);
    assert!(text_of(&result).contains("N: 봄: 봄, 생명력"));
}

#[tokio::test]
async fn meaning_never_fails_on_short_input() {
    for name in ["김", ""] {
        let result = meaning(name).await;
        assert_ne!(result.is_error, Some(true));
        let payload = result.structured_content.expect("structured content");
        assert_eq!(payload["family_name"], "");
        assert_eq!(payload["given_name"], name);
        assert_eq!(payload["meanings"][0]["gloss"], SHORT_NAME_GLOSS);
        assert!(payload["interpretation"]
            .as_str()
            .is_some_and(|text| text.contains(SHORT_NAME_GLOSS)));
    }
}
