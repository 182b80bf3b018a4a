//! Korean Name Generator MCP Server
//!
//! Generates Korean personal names from keywords and a style, and explains what a name means.
//!
//! ## Tools
//!
//! - `generate_korean_name` - Synthesize names from keywords, style, gender and count
//! - `get_name_meaning` - Split a name into family/given parts and gloss each character
//! - `suggest_name_keywords` - List keyword categories and styles
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "korean-name": {
//!       "command": "korean-name-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! `KOREAN_NAME_CONFIG` points at a JSON/TOML config file and `KOREAN_NAME_SEED` fixes the RNG
//! seed for reproducible output.

use anyhow::Result;
use korean_name_core::NameConfig;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::NameService;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--print-tools") {
        let inventory = tools::catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = NameConfig::from_env_or_default();

    log::info!("Starting Korean name MCP server");

    let service = NameService::with_config(config);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Korean name MCP server stopped");
    Ok(())
}
