//! Parameter identity and the finished declaration handed to the emitter.

use crate::direction::Direction;
use crate::marshal::MarshalingDescriptor;
use crate::representation::Representation;

/// A parameter's declared name and ordinal index, as reported by the header
/// parser's cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterIdentity {
    name: Option<String>,
    index: u32,
}

impl ParameterIdentity {
    /// A parameter with a declared name.
    pub fn named(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: Some(name.into()),
            index,
        }
    }

    /// A parameter the header declared without a name.
    pub fn unnamed(index: u32) -> Self {
        Self { name: None, index }
    }

    /// The declared name, if any.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Zero-based position in the native argument list.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The name used in the generated declaration.
    ///
    /// Unnamed (or empty-named) parameters default to `param{index}` before
    /// any casing conversion, which is performed downstream.
    pub fn effective_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("param{}", self.index),
        }
    }
}

/// A fully resolved parameter declaration.
///
/// One per native argument; consumed by the out-of-scope declaration emitter
/// that assembles the full signature and attribute list. Invariant: exactly
/// one representation, at most one marshaling descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    /// The effective parameter name.
    pub name: String,
    /// The chosen managed representation.
    pub representation: Representation,
    /// How the parameter is passed.
    pub direction: Direction,
    /// Boundary conversion metadata, when the representation needs one.
    pub marshaling: Option<MarshalingDescriptor>,
}
