//! Analysis options: filter profile and whether explanations are rendered.

use crate::error::{AstlensError, Result};
use astlens_api::FilterProfile;
use serde::{Deserialize, Serialize};

pub const FILTER_ENV: &str = "ASTLENS_FILTER";
pub const EXPLANATIONS_ENV: &str = "ASTLENS_EXPLANATIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub filter_profile: FilterProfile,
    pub include_explanations: bool,
}

/// Wire shape of a config document. Profile names stay strings so that an
/// unknown name surfaces as `UnknownFilterProfile` rather than a serde message.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    filter_profile: Option<String>,
    include_explanations: Option<bool>,
}

impl AnalysisConfig {
    pub fn new(filter_profile: FilterProfile) -> Self {
        Self {
            filter_profile,
            include_explanations: false,
        }
    }

    pub fn with_filter_profile(mut self, profile: FilterProfile) -> Self {
        self.filter_profile = profile;
        self
    }

    pub fn with_explanations(mut self, include: bool) -> Self {
        self.include_explanations = include;
        self
    }

    /// Parses a JSON document such as `{"filterProfile": "minimal", "includeExplanations": true}`.
    /// Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;
        let mut config = Self::default();
        if let Some(profile) = raw.filter_profile {
            config.filter_profile = profile.parse()?;
        }
        if let Some(include) = raw.include_explanations {
            config.include_explanations = include;
        }
        Ok(config)
    }

    /// Defaults overridden by `ASTLENS_FILTER` and `ASTLENS_EXPLANATIONS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AnalysisConfig::from_env`] with a caller-supplied variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(profile) = lookup(FILTER_ENV) {
            config.filter_profile = profile.parse()?;
        }
        if let Some(flag) = lookup(EXPLANATIONS_ENV) {
            config.include_explanations = parse_flag(EXPLANATIONS_ENV, &flag)?;
        }
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AstlensError::Config(format!(
            "{name} expects a boolean, got '{other}'"
        ))),
    }
}
