use super::super::*;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<NameService> {
    NameService::tool_router()
}

#[tool_router]
impl NameService {
    /// Synthesize Korean names from keywords and a style.
    #[tool(
        description = "Generate Korean names from keywords (e.g. 봄, 바다, 용감한), a style (cute, cool, elegant, funny, traditional), a gender (male, female, any) and a count clamped to 1-10. Unknown keywords fall back to the style's own characters."
    )]
    pub async fn generate_korean_name(
        &self,
        Parameters(request): Parameters<GenerateKoreanNameRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::generate::generate_korean_name(self, request).await
    }

    /// Explain a name character by character.
    #[tool(
        description = "Interpret a Korean name: split off the one-syllable family name and gloss each character of the given name. Never fails; unknown characters get a generic gloss."
    )]
    pub async fn get_name_meaning(
        &self,
        Parameters(request): Parameters<GetNameMeaningRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::meaning::get_name_meaning(self, request).await
    }

    /// Keyword catalog.
    #[tool(
        description = "List the keyword categories (nature, personality, colour, emotion, profession, animal), the accepted styles and genders, and a usage tip for generate_korean_name."
    )]
    pub async fn suggest_name_keywords(
        &self,
        Parameters(request): Parameters<SuggestNameKeywordsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::keywords::suggest_name_keywords(self, request).await
    }
}
