use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use tokio::process::Command;

mod support;

fn server_command(seed: Option<&str>) -> Result<Command> {
    let mut cmd = Command::new(support::locate_korean_name_mcp_bin()?);
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("KOREAN_NAME_CONFIG");
    match seed {
        Some(seed) => cmd.env("KOREAN_NAME_SEED", seed),
        None => cmd.env_remove("KOREAN_NAME_SEED"),
    };
    Ok(cmd)
}

#[tokio::test]
async fn mcp_exposes_name_tools_and_answers_calls() -> Result<()> {
    let transport = TokioChildProcess::new(server_command(Some("7"))?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "generate_korean_name",
        "get_name_meaning",
        "suggest_name_keywords",
    ] {
        assert!(tool_names.contains(expected), "missing tool {expected}");
    }

    let generate_args = json!({ "keywords": ["봄", "행복한"], "style": "cute", "count": 5 });
    let generate = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_korean_name".into(),
            arguments: generate_args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_korean_name")??;
    assert_ne!(generate.is_error, Some(true), "generate returned error");
    let payload = generate
        .structured_content
        .context("generate missing structured content")?;
    assert_eq!(payload["total_count"], 5);
    let names = payload["names"].as_array().context("names array")?;
    let first_name = names[0]["full_name"]
        .as_str()
        .context("full_name string")?
        .to_string();
    for name in names {
        let full = name["full_name"].as_str().unwrap_or_default();
        let chars = full.chars().count();
        assert!((2..=3).contains(&chars), "unexpected name length: {full}");
    }

    let meaning = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "get_name_meaning".into(),
            arguments: json!({ "name": first_name }).as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling get_name_meaning")??;
    assert_ne!(meaning.is_error, Some(true), "meaning returned error");
    let meaning = meaning
        .structured_content
        .context("meaning missing structured content")?;
    assert_eq!(meaning["name"], first_name.as_str());
    assert!(meaning["interpretation"]
        .as_str()
        .is_some_and(|text| text.ends_with("의미하는 아름다운 이름입니다.")));

    let keywords = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "suggest_name_keywords".into(),
            arguments: json!({}).as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling suggest_name_keywords")??;
    assert_ne!(keywords.is_error, Some(true), "keywords returned error");
    let text = keywords
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default();
    assert!(text.starts_with("[CONTENT]\nA: suggest_name_keywords:"), "{text}");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn invalid_style_is_a_tool_error_not_a_protocol_error() -> Result<()> {
    let transport = TokioChildProcess::new(server_command(None)?).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_korean_name".into(),
            arguments: json!({ "keywords": [], "style": "gothic" }).as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_korean_name")??;

    assert_eq!(result.is_error, Some(true));
    let payload = result
        .structured_content
        .context("error missing structured content")?;
    assert_eq!(payload["error"]["code"], "invalid_request");
    assert_eq!(payload["error"]["details"]["style"], "gothic");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn seeded_servers_generate_identical_batches() -> Result<()> {
    let mut batches = Vec::new();
    for _ in 0..2 {
        let transport =
            TokioChildProcess::new(server_command(Some("2024"))?).context("spawn mcp server")?;
        let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
            .await
            .context("timeout starting MCP server")??;
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            service.call_tool(CallToolRequestParam {
                name: "generate_korean_name".into(),
                arguments: json!({ "keywords": ["바다"], "style": "cool", "count": 6 })
                    .as_object()
                    .cloned(),
            }),
        )
        .await
        .context("timeout calling generate_korean_name")??;
        batches.push(result.structured_content);
        service.cancel().await.context("shutdown mcp service")?;
    }

    assert!(batches[0].is_some());
    assert_eq!(batches[0], batches[1]);
    Ok(())
}

#[tokio::test]
async fn malformed_seed_keeps_config_file_defaults() -> Result<()> {
    let dir = tempfile::tempdir().context("temp dir")?;
    let config_path = dir.path().join("names.toml");
    std::fs::write(&config_path, "default_count = 4\ndefault_style = \"funny\"\n")
        .context("write config")?;

    let mut cmd = server_command(Some("abc"))?;
    cmd.env("KOREAN_NAME_CONFIG", &config_path);
    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_korean_name".into(),
            arguments: json!({ "keywords": ["달"] }).as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_korean_name")??;

    assert_ne!(result.is_error, Some(true), "generate returned error");
    let payload = result
        .structured_content
        .context("generate missing structured content")?;
    assert_eq!(payload["total_count"], 4);
    assert_eq!(payload["style"], "funny");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
