pub(crate) mod generate_korean_name;
pub(crate) mod get_name_meaning;
pub(crate) mod suggest_name_keywords;
