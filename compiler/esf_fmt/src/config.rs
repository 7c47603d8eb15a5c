//! Formatter configuration.
//!
//! Configuration files use the esformatter preset shape:
//!
//! ```json
//! {
//!   "whiteSpace": {
//!     "before": { "ExpressionClosingParentheses": 1 },
//!     "after": { "ExpressionOpeningParentheses": 1 }
//!   }
//! }
//! ```
//!
//! An amount is `-1` (preserve whatever is there) or a space count in
//! `0..=255`. Entries a file omits keep their defaults; keys no rule reads
//! are accepted and ignored, so full presets load unchanged.

use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::whitespace::{Side, SpacingRule};

/// Whitespace amount for one side of one rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub enum SpaceAmount {
    /// Leave existing whitespace untouched.
    #[default]
    Preserve,
    /// Exactly this many spaces.
    Exact(u8),
}

impl TryFrom<i64> for SpaceAmount {
    type Error = InvalidAmount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == -1 {
            return Ok(SpaceAmount::Preserve);
        }
        u8::try_from(value)
            .map(SpaceAmount::Exact)
            .map_err(|_| InvalidAmount(value))
    }
}

impl fmt::Display for SpaceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceAmount::Preserve => f.write_str("-1"),
            SpaceAmount::Exact(n) => write!(f, "{n}"),
        }
    }
}

/// A configured amount outside `-1..=255`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid whitespace amount {0}, expected -1 or 0..=255")]
pub struct InvalidAmount(pub i64);

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-side whitespace amounts, keyed by rule name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhitespaceConfig {
    before: FxHashMap<Box<str>, SpaceAmount>,
    after: FxHashMap<Box<str>, SpaceAmount>,
}

impl WhitespaceConfig {
    /// No entries; every rule preserves.
    pub fn empty() -> Self {
        WhitespaceConfig {
            before: FxHashMap::default(),
            after: FxHashMap::default(),
        }
    }

    /// Amount for `rule` on `side`; unknown entries preserve.
    pub fn amount(&self, side: Side, rule: SpacingRule) -> SpaceAmount {
        self.side(side)
            .get(rule.name())
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&mut self, side: Side, rule: SpacingRule, amount: SpaceAmount) {
        self.side_mut(side).insert(rule.name().into(), amount);
    }

    fn side(&self, side: Side) -> &FxHashMap<Box<str>, SpaceAmount> {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut FxHashMap<Box<str>, SpaceAmount> {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }

    fn merge(&mut self, raw: RawWhitespace) {
        self.before.extend(raw.before);
        self.after.extend(raw.after);
    }
}

/// Defaults: no space just inside expression parentheses.
impl Default for WhitespaceConfig {
    fn default() -> Self {
        let mut config = WhitespaceConfig::empty();
        config.set(
            Side::After,
            SpacingRule::ExpressionOpeningParentheses,
            SpaceAmount::Exact(0),
        );
        config.set(
            Side::Before,
            SpacingRule::ExpressionClosingParentheses,
            SpaceAmount::Exact(0),
        );
        config
    }
}

/// Configuration for the formatter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub whitespace: WhitespaceConfig,
}

impl FormatConfig {
    /// Parse a JSON configuration, layered over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let mut config = FormatConfig::default();
        config.whitespace.merge(raw.white_space);
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        FormatConfig::from_json(&json)
    }

    /// Config with the same amount inside both sides of expression parentheses.
    pub fn with_paren_spaces(amount: SpaceAmount) -> Self {
        let mut config = FormatConfig::default();
        config.whitespace.set(
            Side::After,
            SpacingRule::ExpressionOpeningParentheses,
            amount,
        );
        config.whitespace.set(
            Side::Before,
            SpacingRule::ExpressionClosingParentheses,
            amount,
        );
        config
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    white_space: RawWhitespace,
}

#[derive(Default, Deserialize)]
struct RawWhitespace {
    #[serde(default)]
    before: FxHashMap<Box<str>, SpaceAmount>,
    #[serde(default)]
    after: FxHashMap<Box<str>, SpaceAmount>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
