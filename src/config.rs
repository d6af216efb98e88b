//! Generator configuration.

/// Configuration supplied by the surrounding tool.
///
/// The only knob the parameter core reads is whether a string-array custom
/// marshaler has been emitted for the current module; without one, `char ***`
/// output parameters cannot be represented as string collections and fall
/// through to structural resolution.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Name of the string-array marshaler type, when one is configured.
    pub string_array_marshaler: Option<String>,
}

impl GeneratorConfig {
    /// Configuration with no string-array marshaler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a string-array marshaler of the given type name.
    pub fn with_string_array_marshaler(marshaler: impl Into<String>) -> Self {
        Self {
            string_array_marshaler: Some(marshaler.into()),
        }
    }
}
