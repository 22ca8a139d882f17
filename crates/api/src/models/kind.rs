use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display grouping for node kinds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KindCategory {
    Function,
    Class,
    Variable,
    Control,
    Flow,
    Expression,
    Other,
}

impl KindCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindCategory::Function => "function",
            KindCategory::Class => "class",
            KindCategory::Variable => "variable",
            KindCategory::Control => "control",
            KindCategory::Flow => "flow",
            KindCategory::Expression => "expression",
            KindCategory::Other => "other",
        }
    }
}

impl fmt::Display for KindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named policy selecting which node kinds are kept in a line index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum FilterProfile {
    /// Only a fixed allow-list of high-signal kinds.
    Minimal,
    /// Everything except a fixed deny-list of wrapper kinds.
    #[default]
    Clean,
    /// Every kind.
    All,
}

impl FilterProfile {
    pub const ALL_PROFILES: [FilterProfile; 3] =
        [FilterProfile::Minimal, FilterProfile::Clean, FilterProfile::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterProfile::Minimal => "minimal",
            FilterProfile::Clean => "clean",
            FilterProfile::All => "all",
        }
    }
}

impl fmt::Display for FilterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterProfile {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(FilterProfile::Minimal),
            "clean" => Ok(FilterProfile::Clean),
            "all" => Ok(FilterProfile::All),
            _ => Err(ApiError::UnknownFilterProfile(s.to_string())),
        }
    }
}

impl TryFrom<String> for FilterProfile {
    type Error = ApiError;

    fn try_from(value: String) -> ApiResult<Self> {
        value.parse()
    }
}

impl From<FilterProfile> for String {
    fn from(profile: FilterProfile) -> Self {
        profile.as_str().to_string()
    }
}
