//! The read-only mapping from native type spellings to generated wrapper
//! type names.
//!
//! The table is built in full by the surrounding tool before any parameter
//! is generated and never mutated afterwards. Every record pointee the
//! classifier reaches must resolve against it; a missing entry is a fatal
//! configuration error, not a soft fallback (see
//! [`GeneratorError::MissingTypeMapping`]).

use rustc_hash::FxHashMap;

use crate::error::{GeneratorError, Result};

/// Precomputed mapping from native record spelling to wrapper type name.
#[derive(Debug, Clone, Default)]
pub struct NameMappingTable {
    entries: FxHashMap<String, String>,
}

impl NameMappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping from a native spelling to a wrapper type name.
    ///
    /// Only used during the initialization phase, before generation begins.
    pub fn insert(&mut self, spelling: impl Into<String>, wrapper: impl Into<String>) {
        self.entries.insert(spelling.into(), wrapper.into());
    }

    /// Look up the wrapper type name for a native spelling.
    pub fn get(&self, spelling: &str) -> Option<&str> {
        self.entries.get(spelling).map(String::as_str)
    }

    /// Whether a mapping exists for this spelling.
    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    /// Resolve a record spelling, failing fatally when absent.
    pub fn resolve_record(&self, spelling: &str) -> Result<&str> {
        self.get(spelling)
            .ok_or_else(|| GeneratorError::MissingTypeMapping {
                spelling: spelling.to_string(),
            })
    }

    /// Resolve a function-prototype spelling, failing fatally when absent.
    pub fn resolve_delegate(&self, spelling: &str) -> Result<&str> {
        self.get(spelling)
            .ok_or_else(|| GeneratorError::MissingDelegateMapping {
                spelling: spelling.to_string(),
            })
    }

    /// Number of registered mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, W> FromIterator<(S, W)> for NameMappingTable
where
    S: Into<String>,
    W: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, W)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (spelling, wrapper) in iter {
            table.insert(spelling, wrapper);
        }
        table
    }
}
