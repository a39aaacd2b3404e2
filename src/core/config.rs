use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};
use crate::core::types::WordId;

/// Backing structure of the per-document duplicate guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardStrategy {
    /// Table indexed directly by word ID, grown in fixed steps
    Dense,
    /// Compressed bitmap, for sparse or very large word IDs
    Sparse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionConfig {
    pub guard_strategy: GuardStrategy,
    pub guard_initial_size: usize,              // Entries allocated before the first scan
    pub guard_growth_step: usize,               // Entries added per growth
    pub guard_max_value: Option<WordId>,        // None: dense guard grows without bound
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        IntersectionConfig {
            guard_strategy: GuardStrategy::Dense,
            guard_initial_size: 1000,
            guard_growth_step: 1000,
            guard_max_value: Some(16 * 1024 * 1024), // 16M entries, 16MB of flags
        }
    }
}

impl IntersectionConfig {
    pub fn sparse() -> Self {
        IntersectionConfig {
            guard_strategy: GuardStrategy::Sparse,
            ..IntersectionConfig::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: IntersectionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.guard_initial_size == 0 {
            return Err(Error::invalid_argument("Guard initial size is 0 !"));
        }
        if self.guard_growth_step == 0 {
            return Err(Error::invalid_argument("Guard growth step is 0 !"));
        }
        Ok(())
    }
}
