//! Structural resolution - the fallback when no priority rule matched.
//!
//! Pointer types branch on the pointee kind; everything else resolves
//! through the name mapping table or passes its spelling through for the
//! emitter's default primitive mapping. Resolution also decides whether the
//! parameter is pointer-like, which feeds direction inference.

use crate::context::CallContext;
use crate::error::Result;
use crate::heuristics;
use crate::marshal::MarshalingDescriptor;
use crate::name_map::NameMappingTable;
use crate::native_type::{NativeType, TypeKind};
use crate::representation::Representation;

/// The outcome of structural resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The chosen representation.
    pub representation: Representation,
    /// Whether direction inference should treat this parameter as a pointer.
    pub pointer_like: bool,
    /// Marshaling implied by the chosen branch, if any.
    pub marshaling: Option<MarshalingDescriptor>,
}

impl Resolved {
    fn plain(representation: Representation) -> Self {
        Self {
            representation,
            pointer_like: false,
            marshaling: None,
        }
    }

    fn pointer_like(representation: Representation) -> Self {
        Self {
            representation,
            pointer_like: true,
            marshaling: None,
        }
    }

    fn with_marshaling(representation: Representation, marshaling: MarshalingDescriptor) -> Self {
        Self {
            representation,
            pointer_like: false,
            marshaling: Some(marshaling),
        }
    }
}

/// Resolve a parameter type that no priority rule claimed.
pub fn resolve_structural(
    ty: &NativeType,
    name: &str,
    context: CallContext,
    table: &NameMappingTable,
) -> Result<Resolved> {
    match (ty.kind(), ty.pointee()) {
        (TypeKind::Pointer, Some(pointee)) => resolve_pointee(pointee, name, context, table),
        // A pointer without a pointee descriptor cannot be inspected further.
        (TypeKind::Pointer, None) => Ok(Resolved::plain(Representation::OpaquePointer)),
        _ => Ok(resolve_value(ty, context, table)),
    }
}

/// Resolve a pointer parameter by its pointee kind.
fn resolve_pointee(
    pointee: &NativeType,
    name: &str,
    context: CallContext,
    table: &NameMappingTable,
) -> Result<Resolved> {
    match pointee.kind() {
        // Pointer-to-pointer carries no usable structure.
        TypeKind::Pointer => Ok(Resolved::pointer_like(Representation::OpaquePointer)),

        TypeKind::FunctionProto => {
            let delegate = table.resolve_delegate(pointee.spelling())?;
            Ok(Resolved::plain(Representation::FunctionPointer(
                delegate.to_string(),
            )))
        }

        TypeKind::Void => Ok(Resolved::plain(Representation::OpaquePointer)),

        TypeKind::CharSigned => Ok(resolve_char_pointer(pointee, name, context)),

        TypeKind::WideChar => {
            if pointee.is_const() {
                Ok(Resolved::with_marshaling(
                    Representation::NativeString,
                    MarshalingDescriptor::wide_string(),
                ))
            } else {
                Ok(Resolved::plain(Representation::OpaquePointer))
            }
        }

        TypeKind::Record => {
            if context.is_callback() {
                // A callback signature never exposes a generated wrapper
                // type by reference, only a raw handle.
                Ok(Resolved::pointer_like(Representation::OpaquePointer))
            } else {
                let wrapper = table.resolve_record(pointee.spelling())?;
                Ok(Resolved::pointer_like(Representation::KnownRecord(
                    wrapper.to_string(),
                )))
            }
        }

        // Pointer to anything else: resolve the pointee on its own merits
        // and keep the pointer-likeness. Typedef'd handle types reach their
        // mapped wrapper through here, in every context - this is the path
        // that surfaces handle types inside callback signatures.
        TypeKind::ConstantArray | TypeKind::Primitive => {
            let representation = mapped_or_fallback(pointee, table);
            Ok(Resolved::pointer_like(representation))
        }
    }
}

/// `char *` needs the naming heuristics: some read/write functions use
/// `const char *` for raw data, in which case it is a byte buffer rather
/// than a string.
fn resolve_char_pointer(pointee: &NativeType, name: &str, context: CallContext) -> Resolved {
    if !context.is_callback() && pointee.is_const() {
        if !heuristics::names_data_buffer(name) && !heuristics::is_signature_exception(name) {
            Resolved::with_marshaling(
                Representation::NativeString,
                MarshalingDescriptor::utf8_string(),
            )
        } else {
            Resolved::plain(Representation::ByteSequence)
        }
    } else if context != CallContext::NativeCall
        && !context.is_callback()
        && !pointee.is_const()
        && heuristics::names_data_buffer(name)
    {
        Resolved::plain(Representation::ByteSequence)
    } else {
        // Non-const char pointers with unclear intent stay raw.
        Resolved::plain(Representation::OpaquePointer)
    }
}

/// Resolve a non-pointer parameter type.
fn resolve_value(ty: &NativeType, context: CallContext, table: &NameMappingTable) -> Resolved {
    match table.get(ty.spelling()) {
        Some(_) if context.is_callback() => Resolved::plain(Representation::OpaquePointer),
        Some(wrapper) => Resolved::plain(Representation::KnownRecord(wrapper.to_string())),
        None => Resolved::plain(Representation::RawFallback(ty.spelling().to_string())),
    }
}

/// Table lookup by spelling with a raw-spelling fallback, no context gate.
fn mapped_or_fallback(ty: &NativeType, table: &NameMappingTable) -> Representation {
    match table.get(ty.spelling()) {
        Some(wrapper) => Representation::KnownRecord(wrapper.to_string()),
        None => Representation::RawFallback(ty.spelling().to_string()),
    }
}
