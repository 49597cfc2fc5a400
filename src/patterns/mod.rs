use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Misspelling catalogue bundled into the binary, mirroring the upstream
/// `patterns.json` layout: one object per correct spelling with all of its
/// known misspelled variants.
const EMBEDDED_PATTERNS: &str = include_str!("patterns.json");

#[derive(Debug, Error)]
#[error("malformed pattern data: {0}")]
pub struct DataError(#[from] serde_json::Error);

#[derive(Debug, Clone, Deserialize)]
pub struct PatternGroup {
    /// The correct spelling.
    pub expected: String,
    /// Known misspellings that should be corrected to `expected`.
    pub patterns: Vec<String>,
}

/// Flat runtime mapping from misspelled substring to suggested correction.
/// Built once at startup; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    map: HashMap<String, String>,
}

impl PatternTable {
    /// Parse the embedded catalogue and flatten it into a lookup table.
    ///
    /// The embedded source is static, so a parse failure is fatal for the
    /// run; there is nothing to retry against.
    pub fn load_embedded() -> Result<Self, DataError> {
        let groups: Vec<PatternGroup> = serde_json::from_str(EMBEDDED_PATTERNS)?;
        Ok(Self::from_groups(groups))
    }

    /// Flatten groups into (pattern -> expected) entries. A pattern listed in
    /// more than one group (or twice in one group) resolves last-write-wins;
    /// duplicates are not an error.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = PatternGroup>,
    {
        let mut map = HashMap::new();
        for group in groups {
            for pattern in group.patterns {
                map.insert(pattern, group.expected.clone());
            }
        }
        Self { map }
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.map.get(pattern).map(String::as_str)
    }

    /// Iteration order is the map's own and carries no guarantee.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(p, e)| (p.as_str(), e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
