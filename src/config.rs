//! Configuration for token pipelines.
//!
//! A [`RetokConfig`] is built once (defaults, a JSON file, then environment
//! overrides) and passed by reference into every pipeline constructor.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetokError};

/// Environment variable overriding [`RetokConfig::suffix_display`].
pub const SUFFIX_DISPLAY_ENV: &str = "RETOK_SUFFIX_DISPLAY";

/// How decomposed suffixes are rendered in space-joined output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixDisplay {
    /// Keep the suffix as its own marked token: `책 −은`.
    #[default]
    Keep,

    /// Glue the suffix to its stem: `책−은`.
    Join,

    /// Drop the marker and keep the suffix as a plain token: `책 은`.
    Hide,
}

impl FromStr for SuffixDisplay {
    type Err = RetokError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(SuffixDisplay::Keep),
            "join" => Ok(SuffixDisplay::Join),
            "hide" => Ok(SuffixDisplay::Hide),
            other => Err(RetokError::config(format!(
                "unknown suffix display '{other}', expected keep, join or hide"
            ))),
        }
    }
}

impl fmt::Display for SuffixDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuffixDisplay::Keep => "keep",
            SuffixDisplay::Join => "join",
            SuffixDisplay::Hide => "hide",
        };
        f.write_str(name)
    }
}

/// Settings of the Korean decomposition filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoreanConfig {
    /// Emit at most one stem/suffix decomposition per word.
    /// When false, words without an exact decomposition expand into keywords.
    pub return_single_best: bool,

    /// Add stem bigrams to the keywords.
    pub bigram: bool,

    /// Keep the original word among the keywords.
    pub keep_original: bool,

    /// Add compound noun components to the keywords.
    pub decompound: bool,
}

impl Default for KoreanConfig {
    fn default() -> Self {
        Self {
            return_single_best: true,
            bigram: true,
            keep_original: true,
            decompound: false,
        }
    }
}

/// Configuration shared by all pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetokConfig {
    /// Marker fused with a following number (`第` + `3`).
    pub ordinal_marker: char,

    /// Connector opening a conjunction run.
    pub and_particle: char,

    /// Connector closing a conjunction run.
    pub or_particle: char,

    /// Replacement for spaces inside a token in space-joined output.
    pub space_marker: char,

    /// Prefix of decomposed suffix tokens.
    pub suffix_marker: char,

    /// Rendering of suffix tokens in space-joined output.
    pub suffix_display: SuffixDisplay,

    /// Korean decomposition settings.
    pub korean: KoreanConfig,
}

impl Default for RetokConfig {
    fn default() -> Self {
        Self {
            ordinal_marker: '第',
            and_particle: '和',
            or_particle: '或',
            space_marker: '\u{2017}',
            suffix_marker: '\u{2212}',
            suffix_display: SuffixDisplay::Keep,
            korean: KoreanConfig::default(),
        }
    }
}

impl RetokConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RetokConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        let value = std::env::var(SUFFIX_DISPLAY_ENV).ok();
        self.with_suffix_display_override(value.as_deref())
    }

    /// Apply a suffix display override given as text, if any.
    pub fn with_suffix_display_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.suffix_display = value.parse()?;
            log::debug!("suffix display overridden to {}", self.suffix_display);
        }
        Ok(self)
    }

    /// Check that the configured markers can be told apart.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("ordinal_marker", self.ordinal_marker),
            ("and_particle", self.and_particle),
            ("or_particle", self.or_particle),
            ("space_marker", self.space_marker),
            ("suffix_marker", self.suffix_marker),
        ];
        for (field, c) in markers {
            if c.is_whitespace() || c.is_control() {
                return Err(RetokError::config(format!(
                    "{field} must be a visible character, got {c:?}"
                )));
            }
        }
        if self.and_particle == self.or_particle {
            return Err(RetokError::config(
                "and_particle and or_particle must differ",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RetokConfig::default();
        assert_eq!(config.ordinal_marker, '第');
        assert_eq!(config.and_particle, '和');
        assert_eq!(config.or_particle, '或');
        assert_eq!(config.suffix_display, SuffixDisplay::Keep);
        assert!(config.korean.return_single_best);
        assert!(!config.korean.decompound);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = RetokConfig::from_json_str(
            r#"{"suffix_display": "join", "korean": {"return_single_best": false}}"#,
        )
        .unwrap();
        assert_eq!(config.suffix_display, SuffixDisplay::Join);
        assert!(!config.korean.return_single_best);
        assert!(config.korean.bigram);
        assert_eq!(config.ordinal_marker, '第');
    }

    #[test]
    fn test_invalid_config() {
        let result = RetokConfig::from_json_str(r#"{"and_particle": "或"}"#);
        assert!(matches!(result, Err(RetokError::Config(_))));

        let result = RetokConfig::from_json_str(r#"{"space_marker": " "}"#);
        assert!(result.is_err());

        let result = RetokConfig::from_json_str(r#"{"suffix_display": "shout"}"#);
        assert!(matches!(result, Err(RetokError::Json(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ordinal_marker": "號"}}"#).unwrap();

        let config = RetokConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.ordinal_marker, '號');

        let missing = RetokConfig::from_json_file("/nonexistent/retok.json");
        assert!(matches!(missing, Err(RetokError::Io(_))));
    }

    #[test]
    fn test_suffix_display_override() {
        let config = RetokConfig::default()
            .with_suffix_display_override(Some("HIDE"))
            .unwrap();
        assert_eq!(config.suffix_display, SuffixDisplay::Hide);

        let config = RetokConfig::default()
            .with_suffix_display_override(None)
            .unwrap();
        assert_eq!(config.suffix_display, SuffixDisplay::Keep);

        let result = RetokConfig::default().with_suffix_display_override(Some("loud"));
        assert!(result.is_err());
    }
}
