//! Error types for the parameter generation core.
//!
//! The decision procedure is total over well-formed input: every combination
//! of native type kind and call context resolves to a declaration. The only
//! failures are configuration failures, where a native type reached during
//! resolution has no entry in the [`NameMappingTable`](crate::NameMappingTable).
//! These are fatal by design: guessing a wrapper type would generate code that
//! compiles against the wrong type, so generation aborts instead.

use thiserror::Error;

/// Errors raised while assembling a parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A record pointee's spelling was not found in the name mapping table.
    ///
    /// The table is built in full before any parameter is generated, so a
    /// missing entry means the surrounding tool never emitted a wrapper type
    /// for this record. Generation cannot proceed.
    #[error("no wrapper type mapping for native record type '{spelling}'")]
    MissingTypeMapping {
        /// The native spelling that had no mapping.
        spelling: String,
    },

    /// A function-prototype pointee had no generated delegate type associated
    /// with it in the name mapping table.
    #[error("no delegate type mapping for native function prototype '{spelling}'")]
    MissingDelegateMapping {
        /// The native spelling that had no mapping.
        spelling: String,
    },
}

impl GeneratorError {
    /// The native spelling that triggered this error.
    pub fn spelling(&self) -> &str {
        match self {
            GeneratorError::MissingTypeMapping { spelling } => spelling,
            GeneratorError::MissingDelegateMapping { spelling } => spelling,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeneratorError>;
