//! Call contexts - the kind of wrapper function being generated.

/// The kind of wrapper function a parameter is being generated for.
///
/// The same native parameter type is declared differently depending on the
/// wrapper it appears in: a `device_t *` is an output in a constructor-like
/// wrapper, an input in a destructor-like wrapper, and a raw handle inside a
/// callback signature. The context is supplied by the caller once per
/// function and threaded through every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallContext {
    /// No particular wrapper shape; conservative defaults apply.
    #[default]
    Unspecified,
    /// A constructor-like wrapper that produces a new native resource.
    Constructor,
    /// A plain native call wrapper.
    NativeCall,
    /// A destructor-like wrapper that releases a native resource.
    Destructor,
    /// The signature of a callback the native side invokes.
    CallbackSignature,
}

impl CallContext {
    /// Whether this context is a callback signature.
    ///
    /// Callback signatures never expose generated wrapper types or managed
    /// strings by reference; the native side owns every argument it passes.
    #[inline]
    pub const fn is_callback(self) -> bool {
        matches!(self, CallContext::CallbackSignature)
    }
}
