//! Target-language representations of native parameter types.

use std::fmt::{self, Display, Formatter};

/// The managed representation chosen for a native parameter.
///
/// Exactly one representation is chosen per parameter. Variants that carry a
/// `String` reference a previously-generated target type by name; the name
/// comes from the read-only [`NameMappingTable`](crate::NameMappingTable).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Representation {
    /// A managed string crossing the boundary with a conversion.
    NativeString,
    /// A raw byte buffer.
    ByteSequence,
    /// A read-only collection of strings.
    ReadOnlyStringCollection,
    /// An opaque pointer with no further structure exposed.
    OpaquePointer,
    /// A previously-generated wrapper type for a known native type.
    KnownRecord(String),
    /// A previously-generated delegate type for a function prototype.
    FunctionPointer(String),
    /// No mapping applies; the native spelling passes through for the
    /// emitter's default primitive mapping.
    RawFallback(String),
}

impl Representation {
    /// The mapped target type name, when this representation carries one.
    pub fn mapped_name(&self) -> Option<&str> {
        match self {
            Representation::KnownRecord(name) | Representation::FunctionPointer(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    /// Whether the mapped type follows the handle naming convention.
    ///
    /// Handle types own a native resource; inside callback signatures they
    /// receive a dedicated marshaler and are always outputs.
    pub fn is_handle_like(&self) -> bool {
        self.mapped_name().is_some_and(|name| name.ends_with("Handle"))
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Representation::NativeString => write!(f, "string"),
            Representation::ByteSequence => write!(f, "byte[]"),
            Representation::ReadOnlyStringCollection => write!(f, "ReadOnlyCollection<string>"),
            Representation::OpaquePointer => write!(f, "IntPtr"),
            Representation::KnownRecord(name) => write!(f, "{name}"),
            Representation::FunctionPointer(name) => write!(f, "{name}"),
            Representation::RawFallback(spelling) => write!(f, "{spelling}"),
        }
    }
}
