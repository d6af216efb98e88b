//! End-to-end parameter assembly scenarios.
//!
//! These tests drive the full pipeline (classification, structural
//! resolution, handle forcing, direction inference) the way the surrounding
//! generator does: one prebuilt name mapping table, one assembler, one call
//! per native argument.

use marshalgen::{
    CallContext, Direction, GeneratorConfig, GeneratorError, MarshalingDescriptor,
    NameMappingTable, NativeType, ParameterAssembler, ParameterDeclaration, ParameterIdentity,
    Representation,
};

fn table() -> NameMappingTable {
    [
        ("device_t", "Device"),
        ("foo_t", "Foo"),
        ("idevice_t", "IdeviceHandle"),
        ("idevice_event_cb_t", "IdeviceEventCallback"),
    ]
    .into_iter()
    .collect()
}

fn char_ptr() -> NativeType {
    NativeType::pointer_to(NativeType::char_signed())
}

fn assemble_with(
    config: GeneratorConfig,
    ty: &NativeType,
    name: &str,
    context: CallContext,
) -> Result<ParameterDeclaration, GeneratorError> {
    let table = table();
    let assembler = ParameterAssembler::new(&table, config);
    assembler.assemble(ty, &ParameterIdentity::named(name, 0), context)
}

fn assemble(
    ty: &NativeType,
    name: &str,
    context: CallContext,
) -> Result<ParameterDeclaration, GeneratorError> {
    assemble_with(GeneratorConfig::new(), ty, name, context)
}

// =============================================================================
// String-shaped pointer scenarios
// =============================================================================

#[test]
fn char_double_pointer_named_path_is_string_output() {
    let ty = NativeType::pointer_to(char_ptr());
    let decl = assemble(&ty, "path", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::NativeString);
    assert_eq!(decl.direction, Direction::Out);
    assert_eq!(decl.marshaling, Some(MarshalingDescriptor::native_string()));
}

#[test]
fn char_double_pointer_named_data_falls_through_to_raw_pointer() {
    let ty = NativeType::pointer_to(char_ptr());
    let decl = assemble(&ty, "data", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::OpaquePointer);
    assert_eq!(decl.direction, Direction::Out);
    assert!(decl.marshaling.is_none());
}

#[test]
fn char_double_pointer_named_appids_falls_through() {
    let ty = NativeType::pointer_to(char_ptr());
    let decl = assemble(&ty, "appids", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::OpaquePointer);
    assert!(decl.marshaling.is_none());

    // Same type, unexceptional name: the string rule applies.
    let decl = assemble(&ty, "path", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::NativeString);
    assert_eq!(decl.direction, Direction::Out);
}

#[test]
fn char_triple_pointer_is_string_array_output_when_configured() {
    let ty = NativeType::pointer_to(NativeType::pointer_to(char_ptr()));
    let config = GeneratorConfig::with_string_array_marshaler("NativeStringArrayMarshaler");
    let decl = assemble_with(config, &ty, "names", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::ReadOnlyStringCollection);
    assert_eq!(decl.direction, Direction::Out);
    assert_eq!(
        decl.marshaling,
        Some(MarshalingDescriptor::custom("NativeStringArrayMarshaler"))
    );
}

#[test]
fn char_triple_pointer_without_configured_marshaler_stays_opaque() {
    let ty = NativeType::pointer_to(NativeType::pointer_to(char_ptr()));
    let decl = assemble(&ty, "names", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::OpaquePointer);
    assert_eq!(decl.direction, Direction::Out);
}

#[test]
fn const_char_double_pointer_is_string_array_input() {
    let inner = NativeType::pointer_to(NativeType::char_signed().as_const());
    let ty = NativeType::pointer_to(inner);
    let decl = assemble(&ty, "keys", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::ReadOnlyStringCollection);
    assert_eq!(decl.direction, Direction::In);
    assert_eq!(
        decl.marshaling,
        Some(MarshalingDescriptor::native_string_array())
    );
}

// =============================================================================
// Record resolution
// =============================================================================

#[test]
fn record_pointer_in_destructor_round_trips_through_table() {
    let ty = NativeType::pointer_to(NativeType::record("device_t"));
    let decl = assemble(&ty, "device", CallContext::Destructor).unwrap();
    assert_eq!(
        decl.representation,
        Representation::KnownRecord("Device".to_string())
    );
    assert_eq!(decl.direction, Direction::In);
    assert!(decl.marshaling.is_none());
}

#[test]
fn record_pointer_in_native_call_is_output() {
    let ty = NativeType::pointer_to(NativeType::record("foo_t"));
    let decl = assemble(&ty, "out_foo", CallContext::NativeCall).unwrap();
    assert_eq!(
        decl.representation,
        Representation::KnownRecord("Foo".to_string())
    );
    assert_eq!(decl.direction, Direction::Out);
    assert!(decl.marshaling.is_none());
}

#[test]
fn record_pointer_in_callback_is_raw_handle() {
    let ty = NativeType::pointer_to(NativeType::record("device_t"));
    let decl = assemble(&ty, "device", CallContext::CallbackSignature).unwrap();
    assert_eq!(decl.representation, Representation::OpaquePointer);
    assert_eq!(decl.direction, Direction::Ref);
    assert!(decl.marshaling.is_none());
}

#[test]
fn unmapped_record_pointer_is_a_fatal_configuration_error() {
    let ty = NativeType::pointer_to(NativeType::record("lockdownd_client_t"));
    for context in [
        CallContext::Unspecified,
        CallContext::Constructor,
        CallContext::NativeCall,
        CallContext::Destructor,
    ] {
        let err = assemble(&ty, "client", context).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::MissingTypeMapping {
                spelling: "lockdownd_client_t".to_string()
            }
        );
    }
}

// =============================================================================
// Handle forcing in callback signatures
// =============================================================================

#[test]
fn handle_typedef_pointer_in_callback_forces_marshaler_and_out_direction() {
    let ty = NativeType::pointer_to(NativeType::primitive("idevice_t"));
    let decl = assemble(&ty, "device", CallContext::CallbackSignature).unwrap();
    assert_eq!(
        decl.representation,
        Representation::KnownRecord("IdeviceHandle".to_string())
    );
    assert_eq!(decl.direction, Direction::Out);
    assert_eq!(
        decl.marshaling,
        Some(MarshalingDescriptor::handle_delegate("IdeviceHandle"))
    );
}

#[test]
fn handle_typedef_pointer_outside_callback_keeps_plain_marshaling() {
    let ty = NativeType::pointer_to(NativeType::primitive("idevice_t"));
    let decl = assemble(&ty, "device", CallContext::Unspecified).unwrap();
    assert_eq!(
        decl.representation,
        Representation::KnownRecord("IdeviceHandle".to_string())
    );
    // Handles are known outputs even when the context gives no hint.
    assert_eq!(decl.direction, Direction::Out);
    assert!(decl.marshaling.is_none());
}

#[test]
fn non_handle_wrapper_in_callback_is_not_forced() {
    let ty = NativeType::pointer_to(NativeType::primitive("device_t"));
    let decl = assemble(&ty, "device", CallContext::CallbackSignature).unwrap();
    assert_eq!(
        decl.representation,
        Representation::KnownRecord("Device".to_string())
    );
    assert_eq!(decl.direction, Direction::Ref);
    assert!(decl.marshaling.is_none());
}

// =============================================================================
// Function prototypes and plain values
// =============================================================================

#[test]
fn function_prototype_pointer_resolves_to_delegate_by_value() {
    let ty = NativeType::pointer_to(NativeType::function_proto("idevice_event_cb_t"));
    let decl = assemble(&ty, "callback", CallContext::NativeCall).unwrap();
    assert_eq!(
        decl.representation,
        Representation::FunctionPointer("IdeviceEventCallback".to_string())
    );
    assert_eq!(decl.direction, Direction::ByValue);
    assert!(decl.marshaling.is_none());
}

#[test]
fn unmapped_primitive_passes_through_by_value() {
    let decl = assemble(
        &NativeType::primitive("uint32_t"),
        "timeout",
        CallContext::NativeCall,
    )
    .unwrap();
    assert_eq!(
        decl.representation,
        Representation::RawFallback("uint32_t".to_string())
    );
    assert_eq!(decl.direction, Direction::ByValue);
    assert!(decl.marshaling.is_none());
}

#[test]
fn const_char_pointer_is_utf8_string_by_value() {
    let ty = NativeType::pointer_to(NativeType::char_signed().as_const());
    let decl = assemble(&ty, "label", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::NativeString);
    assert_eq!(decl.direction, Direction::ByValue);
    assert_eq!(decl.marshaling, Some(MarshalingDescriptor::utf8_string()));
}

#[test]
fn const_char_pointer_named_signature_is_byte_sequence() {
    let ty = NativeType::pointer_to(NativeType::char_signed().as_const());
    let decl = assemble(&ty, "signature", CallContext::NativeCall).unwrap();
    assert_eq!(decl.representation, Representation::ByteSequence);
    assert!(decl.marshaling.is_none());
}

// =============================================================================
// Whole-signature assembly
// =============================================================================

#[test]
fn full_signature_in_argument_order() {
    // idevice_error_t idevice_new(idevice_t *device, const char *udid)
    let mapping = table();
    let assembler = ParameterAssembler::new(&mapping, GeneratorConfig::new());

    let params = [
        (
            NativeType::pointer_to(NativeType::primitive("idevice_t")),
            ParameterIdentity::named("device", 0),
        ),
        (
            NativeType::pointer_to(NativeType::char_signed().as_const()),
            ParameterIdentity::named("udid", 1),
        ),
    ];

    let decls: Vec<_> = params
        .iter()
        .map(|(ty, identity)| {
            assembler
                .assemble(ty, identity, CallContext::Constructor)
                .unwrap()
        })
        .collect();

    assert_eq!(decls[0].name, "device");
    assert_eq!(
        decls[0].representation,
        Representation::KnownRecord("IdeviceHandle".to_string())
    );
    assert_eq!(decls[0].direction, Direction::Out);

    assert_eq!(decls[1].name, "udid");
    assert_eq!(decls[1].representation, Representation::NativeString);
    assert_eq!(decls[1].direction, Direction::ByValue);
    assert_eq!(decls[1].marshaling, Some(MarshalingDescriptor::utf8_string()));
}

#[test]
fn every_kind_and_context_combination_resolves() {
    let mapping = table();
    let assembler = ParameterAssembler::new(&mapping, GeneratorConfig::new());
    let identity = ParameterIdentity::named("value", 0);

    let types = [
        NativeType::primitive("uint32_t"),
        NativeType::record("device_t"),
        NativeType::void(),
        NativeType::char_signed(),
        NativeType::wide_char(),
        NativeType::array_of(NativeType::primitive("int")),
        NativeType::pointer_to(NativeType::void()),
        NativeType::pointer_to(NativeType::char_signed()),
        NativeType::pointer_to(NativeType::char_signed().as_const()),
        NativeType::pointer_to(NativeType::wide_char().as_const()),
        NativeType::pointer_to(NativeType::record("device_t")),
        NativeType::pointer_to(NativeType::primitive("idevice_t")),
        NativeType::pointer_to(NativeType::function_proto("idevice_event_cb_t")),
        NativeType::pointer_to(NativeType::pointer_to(NativeType::char_signed())),
    ];
    let contexts = [
        CallContext::Unspecified,
        CallContext::Constructor,
        CallContext::NativeCall,
        CallContext::Destructor,
        CallContext::CallbackSignature,
    ];

    for ty in &types {
        for context in contexts {
            let decl = assembler
                .assemble(ty, &identity, context)
                .unwrap_or_else(|e| panic!("{}: failed in {context:?}: {e}", ty.spelling()));
            // Every declaration carries exactly one representation and at
            // most one descriptor by construction; spot-check the invariant
            // that string representations always carry marshaling.
            if decl.representation == Representation::NativeString {
                assert!(decl.marshaling.is_some());
            }
        }
    }
}
