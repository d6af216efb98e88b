//! Parameter classification core for a native binding generator.
//!
//! Given a native (C-style) parameter description produced by an external
//! header parser, this crate decides what the generated managed declaration
//! must look like: the representation type, the passing direction, and the
//! marshaling needed to cross the native/managed boundary safely. It never
//! parses native source and never marshals anything at runtime; it only
//! decides, at generation time, what the emitted declaration should carry.
//!
//! ## Pipeline
//!
//! Data flows one way through four stages:
//!
//! ```text
//! NativeType + ParameterIdentity + CallContext
//!     -> priority classification   (classify, string-shaped pointers)
//!     -> structural resolution     (resolve, pointer/non-pointer fallback)
//!     -> handle-marshaler forcing  (callback signatures only)
//!     -> direction inference       (direction, pointer-like parameters)
//!     -> ParameterDeclaration
//! ```
//!
//! [`ParameterAssembler`] composes the stages. The [`NameMappingTable`] is
//! built once by the surrounding tool before generation begins and is
//! read-only thereafter; a record spelling missing from it is a fatal
//! configuration error ([`GeneratorError::MissingTypeMapping`]).
//!
//! ## Example
//!
//! ```
//! use marshalgen::{
//!     CallContext, GeneratorConfig, NameMappingTable, NativeType, ParameterAssembler,
//!     ParameterIdentity, Direction, Representation,
//! };
//!
//! let table: NameMappingTable = [("device_t", "Device")].into_iter().collect();
//! let assembler = ParameterAssembler::new(&table, GeneratorConfig::new());
//!
//! let ty = NativeType::pointer_to(NativeType::record("device_t"));
//! let decl = assembler
//!     .assemble(&ty, &ParameterIdentity::named("device", 0), CallContext::Destructor)
//!     .unwrap();
//!
//! assert_eq!(decl.representation, Representation::KnownRecord("Device".to_string()));
//! assert_eq!(decl.direction, Direction::In);
//! assert!(decl.marshaling.is_none());
//! ```

pub mod assemble;
pub mod classify;
pub mod config;
pub mod context;
pub mod direction;
pub mod error;
pub mod heuristics;
pub mod marshal;
pub mod name_map;
pub mod native_type;
pub mod parameter;
pub mod representation;
pub mod resolve;

pub use assemble::ParameterAssembler;
pub use classify::{SpecialCase, classify_special};
pub use config::GeneratorConfig;
pub use context::CallContext;
pub use direction::{Direction, infer_pointer_direction};
pub use error::{GeneratorError, Result};
pub use marshal::{ConversionKind, MarshalingDescriptor};
pub use name_map::NameMappingTable;
pub use native_type::{NativeType, TypeKind};
pub use parameter::{ParameterDeclaration, ParameterIdentity};
pub use representation::Representation;
pub use resolve::{Resolved, resolve_structural};
