//! Passing-direction inference for pointer-like parameters.

use std::fmt::{self, Display, Formatter};

use crate::context::CallContext;

/// How a parameter is passed across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Plain by-value passing; the default for non-pointer-like parameters.
    #[default]
    ByValue,
    /// Input reference; the callee only reads.
    In,
    /// Output reference; the callee writes a result.
    Out,
    /// Read-write reference.
    Ref,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ByValue => write!(f, "by-value"),
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
            Direction::Ref => write!(f, "ref"),
        }
    }
}

/// Infer the direction of a pointer-like parameter from its call context.
///
/// The context encodes ownership flow: constructor-like and plain native
/// calls write results through pointer parameters, destructor-like calls
/// consume them, and for unspecified or callback contexts the pointer intent
/// cannot be inferred further - handles are known outputs, anything else is
/// conservatively read-write.
///
/// The match is exhaustive over [`CallContext`], so an unhandled context
/// cannot compile, let alone reach generation.
pub fn infer_pointer_direction(context: CallContext, handle_like: bool) -> Direction {
    match context {
        CallContext::Unspecified | CallContext::CallbackSignature => {
            if handle_like {
                Direction::Out
            } else {
                Direction::Ref
            }
        }
        CallContext::Constructor | CallContext::NativeCall => Direction::Out,
        CallContext::Destructor => Direction::In,
    }
}
