use korean_name_core::{Gender, GeneratedName, Lexicon, NameError, NameRequest, Style};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use korean_name_core::{CharacterGloss, Interpretation};

pub const SERVER_NAME: &str = "korean-name-mcp";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<&NameError> for ErrorEnvelope {
    fn from(err: &NameError) -> Self {
        let envelope = Self::new(err.code(), err.to_string());
        match err {
            NameError::InvalidStyle { value, expected } => ErrorEnvelope {
                details: Some(serde_json::json!({ "style": value })),
                ..envelope.with_hint(format!("Pass style as one of: {expected}"))
            },
            NameError::InvalidGender { value, expected } => ErrorEnvelope {
                details: Some(serde_json::json!({ "gender": value })),
                ..envelope.with_hint(format!("Pass gender as one of: {expected}"))
            },
            NameError::InvalidConfig(_) => envelope,
        }
    }
}

/// Payload of `generate_korean_name`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct GenerateNamesResult {
    pub names: Vec<GeneratedName>,
    /// Keywords as supplied by the caller
    pub keywords_used: Vec<String>,
    /// The subset of `keywords_used` found in the keyword index
    pub matched_keywords: Vec<String>,
    pub style: Style,
    pub gender: Gender,
    pub total_count: usize,
    pub message: String,
}

impl GenerateNamesResult {
    #[must_use]
    pub fn new(request: &NameRequest, names: Vec<GeneratedName>, lexicon: &Lexicon) -> Self {
        let total_count = names.len();
        Self {
            names,
            keywords_used: request.keywords.clone(),
            matched_keywords: lexicon.recognized_keywords(&request.keywords),
            style: request.style,
            gender: request.gender,
            total_count,
            message: format!(
                "'{}' 스타일로 {total_count}개의 이름을 생성했습니다.",
                request.style
            ),
        }
    }
}

/// Payload of `suggest_name_keywords`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct KeywordSuggestions {
    pub categories: BTreeMap<String, Vec<String>>,
    pub styles: Vec<Style>,
    pub genders: Vec<Gender>,
    pub total_keywords: usize,
    pub usage_tip: String,
}

impl KeywordSuggestions {
    #[must_use]
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let categories: BTreeMap<String, Vec<String>> = lexicon
            .keyword_categories()
            .iter()
            .map(|category| {
                (
                    category.name.to_string(),
                    category.keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        let total_keywords = categories.values().map(Vec::len).sum();
        let styles = Style::ALL.to_vec();
        let style_list = styles
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            categories,
            styles,
            genders: Gender::ALL.to_vec(),
            total_keywords,
            usage_tip: format!(
                "generate_korean_name에 마음에 드는 키워드를 1~3개 넣고 스타일({style_list})을 골라 보세요. 목록에 없는 키워드는 스타일 기본 글자로 대체됩니다."
            ),
        }
    }
}
