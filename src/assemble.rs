//! The parameter assembler - composition of classification, resolution,
//! handle forcing, and direction inference into one finished declaration.

use crate::classify::classify_special;
use crate::config::GeneratorConfig;
use crate::context::CallContext;
use crate::direction::{Direction, infer_pointer_direction};
use crate::error::Result;
use crate::marshal::MarshalingDescriptor;
use crate::name_map::NameMappingTable;
use crate::native_type::NativeType;
use crate::parameter::{ParameterDeclaration, ParameterIdentity};
use crate::resolve::resolve_structural;

/// Assembles parameter declarations for one generation run.
///
/// Borrows the fully-built [`NameMappingTable`] and owns the generator
/// configuration. The assembler is pure: repeated calls with the same inputs
/// produce identical declarations, and nothing is mutated, so one assembler
/// may be shared across functions (or threads, if the caller parallelizes
/// the outer loop).
#[derive(Debug)]
pub struct ParameterAssembler<'a> {
    table: &'a NameMappingTable,
    config: GeneratorConfig,
}

impl<'a> ParameterAssembler<'a> {
    /// Create an assembler over a prebuilt mapping table.
    pub fn new(table: &'a NameMappingTable, config: GeneratorConfig) -> Self {
        Self { table, config }
    }

    /// Decide the full declaration for one native parameter.
    ///
    /// Evaluation order: priority classification first (string-shaped
    /// pointers, with their pre-assigned directions), then structural
    /// resolution, then the callback handle-marshaler override, then
    /// direction inference for pointer-like parameters.
    pub fn assemble(
        &self,
        ty: &NativeType,
        identity: &ParameterIdentity,
        context: CallContext,
    ) -> Result<ParameterDeclaration> {
        let name = identity.effective_name();

        if let Some(case) = classify_special(ty, &name, context, &self.config) {
            return Ok(ParameterDeclaration {
                name,
                representation: case.representation,
                direction: case.direction,
                marshaling: Some(case.marshaling),
            });
        }

        let resolved = resolve_structural(ty, &name, context, self.table)?;
        let handle_like = resolved.representation.is_handle_like();

        let mut marshaling = resolved.marshaling;
        if context.is_callback()
            && handle_like
            && let Some(type_name) = resolved.representation.mapped_name()
        {
            // Handle types crossing a callback boundary always go through
            // their dedicated marshaler.
            marshaling = Some(MarshalingDescriptor::handle_delegate(type_name));
        }

        let direction = if resolved.pointer_like {
            infer_pointer_direction(context, handle_like)
        } else {
            Direction::ByValue
        };

        Ok(ParameterDeclaration {
            name,
            representation: resolved.representation,
            direction,
            marshaling,
        })
    }
}
