//! Priority classification of string-shaped pointer parameters.
//!
//! These rules run before structural resolution and are evaluated in strict
//! order; the first match wins and fixes representation, direction, and
//! marshaling in one step. Directions assigned here are final and are never
//! revisited by [`infer_pointer_direction`](crate::direction::infer_pointer_direction).

use crate::config::GeneratorConfig;
use crate::context::CallContext;
use crate::direction::Direction;
use crate::heuristics;
use crate::marshal::MarshalingDescriptor;
use crate::native_type::NativeType;
use crate::representation::Representation;

/// Outcome of a priority rule: a complete classification in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCase {
    /// The chosen representation.
    pub representation: Representation,
    /// The pre-assigned direction; never overridden downstream.
    pub direction: Direction,
    /// The marshaling the representation requires.
    pub marshaling: MarshalingDescriptor,
}

/// Apply the priority rules, first match wins.
///
/// Returns `None` when no rule matches and the parameter falls through to
/// structural resolution.
///
/// 1. `char **` named like a string (not a data buffer, not `appids`),
///    outside destructor and callback contexts, is a string output.
/// 2. `char ***` is a string-array output, when a string-array marshaler is
///    configured and the context is not a callback.
/// 3. `char *[]` and `const char **` are string-array inputs outside
///    callback contexts.
pub fn classify_special(
    ty: &NativeType,
    name: &str,
    context: CallContext,
    config: &GeneratorConfig,
) -> Option<SpecialCase> {
    if context != CallContext::Destructor
        && !context.is_callback()
        && ty.is_double_char_pointer()
        && !heuristics::names_data_buffer(name)
        && !heuristics::is_appids_exception(name)
    {
        return Some(SpecialCase {
            representation: Representation::NativeString,
            direction: Direction::Out,
            marshaling: MarshalingDescriptor::native_string(),
        });
    }

    if !context.is_callback() && ty.is_triple_char_pointer() {
        if let Some(marshaler) = config.string_array_marshaler.as_deref() {
            return Some(SpecialCase {
                representation: Representation::ReadOnlyStringCollection,
                direction: Direction::Out,
                marshaling: MarshalingDescriptor::custom(marshaler),
            });
        }
    }

    if !context.is_callback()
        && (ty.is_array_of_char_pointers() || ty.is_double_ptr_to_const_char())
    {
        return Some(SpecialCase {
            representation: Representation::ReadOnlyStringCollection,
            direction: Direction::In,
            marshaling: MarshalingDescriptor::native_string_array(),
        });
    }

    None
}
