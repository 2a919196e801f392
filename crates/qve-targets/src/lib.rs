//! Composable target-type algebra for the QVE valuation engine.
//!
//! A *target type* identifies what kind of thing a computation step acts
//! on: a security, a position, a currency, a portfolio node, or structural
//! combinations of those. This crate provides:
//!
//! - **Descriptors**: a closed five-variant shape (null, wildcard, leaf,
//!   nested, union) behind interned `TargetTypeId`s
//! - **Interning**: equal shapes are the same id, so equality is O(1) and
//!   ids are safe map keys across the engine
//! - **Grammar**: the `/` `|` `(` `)` wire form, parsed and printed
//!   losslessly; the only representation that crosses process boundaries
//! - **Compatibility**: matching against concrete objects, candidate
//!   descriptors, and bare runtime kinds, with sub-kind refinement
//! - **Visitor dispatch**: exhaustive shape-directed branching for
//!   consumers such as a function-resolution engine
//!
//! The subsystem is synchronous, CPU-only, and reentrant; the intern
//! tables are its only shared mutable state.

mod compat;
pub mod error;
mod format;
mod intern;
pub mod kind;
pub mod object;
mod parse;
pub mod resolver;
pub mod types;
pub mod visitor;

pub use error::{KindRegistryError, TargetTypeError};
pub use intern::TargetInterner;
pub use kind::{KindId, KindInfo, KindRegistry};
pub use object::{Primitive, TargetObject};
pub use resolver::{
    CURRENCY_PAIR_SCHEME, CURRENCY_SCHEME, CurrencyResolver, ObjectResolver, PrimitiveResolver,
    UnorderedCurrencyPairResolver,
};
pub use types::{TargetListId, TargetTypeData, TargetTypeId};
pub use visitor::{
    TargetTypeVisitor, is_leaf_type, is_nested_type, is_union_type, leaf_kind, nested_parts,
    union_members,
};

use once_cell::sync::Lazy;

static GLOBAL: Lazy<TargetInterner> = Lazy::new(TargetInterner::new);

/// The process-wide shared interner.
///
/// Most of the engine routes descriptors through this instance so that ids
/// are comparable everywhere. It is never torn down; tests that register
/// their own kind vocabulary should build a private `TargetInterner`
/// instead, or accept that equal shapes legitimately resolve to shared
/// descriptors.
pub fn global() -> &'static TargetInterner {
    &GLOBAL
}
