//! Marshaling descriptors - how a value crosses the native/managed boundary.
//!
//! A descriptor never performs marshaling; it only records, at generation
//! time, which conversion the emitted declaration must carry. Well-known
//! custom marshaler names mirror the runtime support types the surrounding
//! tool emits alongside the bindings.

use std::fmt::{self, Display, Formatter};

/// Custom marshaler emitted for UTF-8 string output parameters.
pub const NATIVE_STRING_MARSHALER: &str = "NativeStringMarshaler";

/// Custom marshaler emitted for NULL-terminated string array parameters.
pub const NATIVE_STRING_ARRAY_MARSHALER: &str = "NativeStringArrayMarshaler";

/// Suffix appended to a handle type name to form its callback marshaler.
pub const HANDLE_DELEGATE_MARSHALER_SUFFIX: &str = "DelegateMarshaler";

/// Built-in conversions that need no custom marshaler type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// Single-byte (UTF-8/ANSI) string conversion.
    Utf8String,
    /// Wide (UTF-16/32) string conversion.
    WideString,
}

/// Marshaling metadata attached to a parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarshalingDescriptor {
    /// Conversion performed by a named custom marshaler type.
    CustomMarshaler(String),
    /// An inline string of a fixed byte length (struct fields only).
    FixedLengthString(u32),
    /// A built-in conversion the target runtime performs itself.
    SimpleConversion(ConversionKind),
}

impl MarshalingDescriptor {
    /// The UTF-8 string custom marshaler used for `char **` outputs.
    pub fn native_string() -> Self {
        MarshalingDescriptor::CustomMarshaler(NATIVE_STRING_MARSHALER.to_string())
    }

    /// The string-array custom marshaler used for `const char **` inputs.
    pub fn native_string_array() -> Self {
        MarshalingDescriptor::CustomMarshaler(NATIVE_STRING_ARRAY_MARSHALER.to_string())
    }

    /// A custom marshaler configured by name (string-array outputs).
    pub fn custom(marshaler: impl Into<String>) -> Self {
        MarshalingDescriptor::CustomMarshaler(marshaler.into())
    }

    /// A fixed-length inline string of `size` bytes.
    pub fn fixed_length_string(size: u32) -> Self {
        MarshalingDescriptor::FixedLengthString(size)
    }

    /// Built-in single-byte string conversion (`const char *`).
    pub fn utf8_string() -> Self {
        MarshalingDescriptor::SimpleConversion(ConversionKind::Utf8String)
    }

    /// Built-in wide string conversion (`const wchar_t *`).
    pub fn wide_string() -> Self {
        MarshalingDescriptor::SimpleConversion(ConversionKind::WideString)
    }

    /// The marshaler that moves a handle type across a callback boundary.
    ///
    /// Derived from the handle type's own name, e.g. `DeviceHandle` is
    /// marshaled by `DeviceHandleDelegateMarshaler`.
    pub fn handle_delegate(type_name: &str) -> Self {
        MarshalingDescriptor::CustomMarshaler(format!(
            "{type_name}{HANDLE_DELEGATE_MARSHALER_SUFFIX}"
        ))
    }

    /// Whether this descriptor references a custom marshaler type.
    pub fn is_custom(&self) -> bool {
        matches!(self, MarshalingDescriptor::CustomMarshaler(_))
    }
}

impl Display for MarshalingDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MarshalingDescriptor::CustomMarshaler(name) => write!(f, "custom({name})"),
            MarshalingDescriptor::FixedLengthString(size) => {
                write!(f, "fixed-length-string({size})")
            }
            MarshalingDescriptor::SimpleConversion(ConversionKind::Utf8String) => {
                write!(f, "utf8-string")
            }
            MarshalingDescriptor::SimpleConversion(ConversionKind::WideString) => {
                write!(f, "wide-string")
            }
        }
    }
}
