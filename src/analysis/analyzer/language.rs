//! Language-specific analyzers.
//!
//! Each language gets a preassembled filter chain over the
//! [`ScriptTokenizer`](crate::analysis::tokenizer::script::ScriptTokenizer):
//!
//! | language | chain                                                                  |
//! |----------|------------------------------------------------------------------------|
//! | Chinese  | width → script split → same-script merge → conjunction → digit/letter → hyphen |
//! | Japanese | width → script split → same-script merge → ordinal → digit/letter → hyphen     |
//! | Korean   | width → morph decomposition → duplicate offset → digit/letter → hyphen          |
//! | other    | width → digit/letter → hyphen                                                   |
//!
//! # Examples
//!
//! ```
//! use retok::analysis::analyzer::language::Language;
//!
//! assert_eq!(Language::parse("zh").unwrap(), Language::Chinese);
//! assert_eq!(Language::parse("jp").unwrap(), Language::Japanese);
//! assert_eq!(Language::parse("ko_g").unwrap(), Language::Korean);
//! assert_eq!(Language::parse("en").unwrap(), Language::Other);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::morph::{MorphAnalyzer, StaticMorphAnalyzer};
use crate::config::RetokConfig;
use crate::error::{Result, RetokError};

pub mod chinese;
pub mod default;
pub mod japanese;
pub mod korean;

/// Suffix marking the alternative identifier of a language, e.g. `zh_g`.
const VARIANT_SUFFIX: &str = "_g";

/// The languages with a dedicated filter chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    Japanese,
    Korean,
    /// Any other language, including Latin-script text.
    Other,
}

impl Language {
    /// Parse a language identifier such as `zh`, `ja`, `jp`, `ko`, `kr` or `ko_g`.
    ///
    /// Only the first two letters are significant; unknown identifiers map
    /// to [`Language::Other`].
    pub fn parse(id: &str) -> Result<Language> {
        let id = id.trim();
        let id = id.strip_suffix(VARIANT_SUFFIX).unwrap_or(id);
        if id.is_empty() {
            return Err(RetokError::invalid_argument("empty language identifier"));
        }

        let prefix: String = id.chars().take(2).flat_map(char::to_lowercase).collect();
        let language = match prefix.as_str() {
            "zh" => Language::Chinese,
            "ko" | "kr" => Language::Korean,
            p if p.starts_with('j') => Language::Japanese,
            _ => Language::Other,
        };
        Ok(language)
    }

    /// The canonical identifier of this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Other => "xx",
        }
    }

    /// Build the default chain for this language.
    ///
    /// `morph` is only used by Korean; without it Korean words pass through
    /// undecomposed.
    pub fn analyzer(
        &self,
        config: &RetokConfig,
        morph: Option<Arc<dyn MorphAnalyzer>>,
    ) -> Result<PipelineAnalyzer> {
        let analyzer = match self {
            Language::Chinese => chinese::ChineseAnalyzer::with_config(config)?.into_inner(),
            Language::Japanese => japanese::JapaneseAnalyzer::with_config(config)?.into_inner(),
            Language::Korean => {
                let morph = morph.unwrap_or_else(|| {
                    log::warn!("no morphological analyzer given, Korean words stay whole");
                    Arc::new(StaticMorphAnalyzer::new())
                });
                korean::KoreanAnalyzer::with_config(morph, config)?.into_inner()
            }
            Language::Other => default::DefaultAnalyzer::with_config(config)?.into_inner(),
        };
        Ok(analyzer)
    }
}

impl FromStr for Language {
    type Err = RetokError;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::parse("zh").unwrap(), Language::Chinese);
        assert_eq!(Language::parse("ZH_g").unwrap(), Language::Chinese);
        assert_eq!(Language::parse("ja").unwrap(), Language::Japanese);
        assert_eq!(Language::parse("jp").unwrap(), Language::Japanese);
        assert_eq!(Language::parse("ja_JP").unwrap(), Language::Japanese);
        assert_eq!(Language::parse("ko").unwrap(), Language::Korean);
        assert_eq!(Language::parse("kr").unwrap(), Language::Korean);
        assert_eq!(Language::parse("en").unwrap(), Language::Other);
        assert_eq!(Language::parse("x").unwrap(), Language::Other);
        assert_eq!("ko_g".parse::<Language>().unwrap(), Language::Korean);
    }

    #[test]
    fn test_parse_empty() {
        assert!(Language::parse("").is_err());
        assert!(Language::parse("_g").is_err());
    }

    #[test]
    fn test_language_analyzers() {
        let config = RetokConfig::default();
        for (language, filters) in [
            (Language::Chinese, 6),
            (Language::Japanese, 6),
            (Language::Korean, 5),
            (Language::Other, 3),
        ] {
            let analyzer = language.analyzer(&config, None).unwrap();
            assert_eq!(analyzer.filters().len(), filters, "{language}");
        }
    }
}
