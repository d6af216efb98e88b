//! Native type descriptors as produced by the header-parsing front end.
//!
//! [`NativeType`] is an immutable description of a C type: its [`TypeKind`],
//! an optional pointee (for pointers and arrays), the textual spelling used
//! as a lookup key into the name mapping table, and const qualification.
//! The core never parses C source; these descriptors arrive fully built from
//! the external parser and are only inspected here.
//!
//! Structural predicates such as [`NativeType::is_double_char_pointer`] live
//! on the type itself so the classification rules read as a flat priority
//! list instead of re-deriving pointer shapes inline.

/// The kind of a native type.
///
/// Mirrors the subset of the header parser's type kinds that the parameter
/// rules distinguish. Everything the rules treat uniformly (integers, floats,
/// enums, typedefs) arrives as [`TypeKind::Primitive`] with a spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A pointer; the pointee is always present.
    Pointer,
    /// A function prototype (only ever observed behind a pointer).
    FunctionProto,
    /// The `void` type.
    Void,
    /// Signed `char`.
    CharSigned,
    /// Wide character (`wchar_t`).
    WideChar,
    /// A struct/union type, identified by spelling.
    Record,
    /// A fixed-length array; the element type sits in the pointee slot.
    ConstantArray,
    /// Any other scalar or typedef'd type, identified by spelling.
    Primitive,
}

/// An immutable native type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeType {
    kind: TypeKind,
    /// Pointee for `Pointer`, element type for `ConstantArray`.
    pointee: Option<Box<NativeType>>,
    spelling: String,
    is_const: bool,
}

impl NativeType {
    /// A scalar or typedef'd type known only by its spelling.
    pub fn primitive(spelling: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Primitive,
            pointee: None,
            spelling: spelling.into(),
            is_const: false,
        }
    }

    /// A record (struct/union) type.
    pub fn record(spelling: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Record,
            pointee: None,
            spelling: spelling.into(),
            is_const: false,
        }
    }

    /// A function prototype type.
    pub fn function_proto(spelling: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::FunctionProto,
            pointee: None,
            spelling: spelling.into(),
            is_const: false,
        }
    }

    /// The `void` type.
    pub fn void() -> Self {
        Self {
            kind: TypeKind::Void,
            pointee: None,
            spelling: "void".to_string(),
            is_const: false,
        }
    }

    /// Signed `char`.
    pub fn char_signed() -> Self {
        Self {
            kind: TypeKind::CharSigned,
            pointee: None,
            spelling: "char".to_string(),
            is_const: false,
        }
    }

    /// Wide character.
    pub fn wide_char() -> Self {
        Self {
            kind: TypeKind::WideChar,
            pointee: None,
            spelling: "wchar_t".to_string(),
            is_const: false,
        }
    }

    /// A pointer to `pointee`.
    pub fn pointer_to(pointee: NativeType) -> Self {
        let spelling = format!("{} *", pointee.spelling);
        Self {
            kind: TypeKind::Pointer,
            pointee: Some(Box::new(pointee)),
            spelling,
            is_const: false,
        }
    }

    /// A fixed-length array of `element`.
    pub fn array_of(element: NativeType) -> Self {
        let spelling = format!("{} []", element.spelling);
        Self {
            kind: TypeKind::ConstantArray,
            pointee: Some(Box::new(element)),
            spelling,
            is_const: false,
        }
    }

    /// Returns this type with the `const` qualifier set.
    pub fn as_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// The kind of this type.
    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The pointee for pointers, the element type for arrays.
    #[inline]
    pub fn pointee(&self) -> Option<&NativeType> {
        self.pointee.as_deref()
    }

    /// The textual spelling of this type, used as a table lookup key.
    #[inline]
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// Whether this type is `const`-qualified.
    #[inline]
    pub const fn is_const(&self) -> bool {
        self.is_const
    }

    // ========================================================================
    // Structural predicates
    // ========================================================================

    /// `char *` or `const char *`.
    pub fn is_ptr_to_char(&self) -> bool {
        self.kind == TypeKind::Pointer
            && self
                .pointee()
                .is_some_and(|p| p.kind == TypeKind::CharSigned)
    }

    /// `const char *`.
    pub fn is_ptr_to_const_char(&self) -> bool {
        self.kind == TypeKind::Pointer
            && self
                .pointee()
                .is_some_and(|p| p.kind == TypeKind::CharSigned && p.is_const)
    }

    /// `char **` with a non-const innermost `char`.
    pub fn is_double_char_pointer(&self) -> bool {
        self.kind == TypeKind::Pointer
            && self
                .pointee()
                .is_some_and(|p| p.is_ptr_to_char() && !p.is_ptr_to_const_char())
    }

    /// `const char **`.
    pub fn is_double_ptr_to_const_char(&self) -> bool {
        self.kind == TypeKind::Pointer
            && self.pointee().is_some_and(|p| p.is_ptr_to_const_char())
    }

    /// `char ***`.
    pub fn is_triple_char_pointer(&self) -> bool {
        self.kind == TypeKind::Pointer
            && self.pointee().is_some_and(|p| {
                p.kind == TypeKind::Pointer && p.pointee().is_some_and(|q| q.is_ptr_to_char())
            })
    }

    /// `char *[]` - a fixed-length array of char pointers.
    pub fn is_array_of_char_pointers(&self) -> bool {
        self.kind == TypeKind::ConstantArray
            && self.pointee().is_some_and(|e| e.is_ptr_to_char())
    }

    /// Number of pointer levels from this type down to a non-pointer.
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while current.kind == TypeKind::Pointer {
            depth += 1;
            match current.pointee() {
                Some(p) => current = p,
                None => break,
            }
        }
        depth
    }
}
