//! Target-type descriptor representation.
//!
//! A descriptor identifies what kind of thing a computation step acts on.
//! The representation is a closed sum type over five shapes:
//!
//! - `Null` — the explicit absence-of-target marker
//! - `Anything` — the wildcard, compatible with every leaf
//! - `Leaf` — one concrete runtime kind
//! - `Nested` — a container of `outer` whose elements satisfy `inner`
//! - `Union` — any of a flattened set of alternatives
//!
//! Descriptors are interned: equal shapes share one `TargetTypeId`, so
//! equality and hashing are O(1) id comparisons and ids are safe map keys.

use crate::kind::KindId;

/// Interned identity of a target-type descriptor.
///
/// Ids are only meaningful relative to the `TargetInterner` that produced
/// them. The built-in descriptors below are interned at fixed ids by every
/// interner, in this order, so they can be named as constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetTypeId(pub u32);

impl TargetTypeId {
    /// The explicit null target type, for the anonymous target.
    pub const NULL: TargetTypeId = TargetTypeId(0);
    /// The wildcard type; compatible with every leaf. Useful when declaring
    /// the target type of a function, useless as a target reference since
    /// no resolver can act on it.
    pub const ANYTHING: TargetTypeId = TargetTypeId(1);
    /// A full portfolio structure.
    pub const PORTFOLIO: TargetTypeId = TargetTypeId(2);
    /// An ordered list of positions and other portfolio nodes.
    pub const PORTFOLIO_NODE: TargetTypeId = TargetTypeId(3);
    /// A position.
    pub const POSITION: TargetTypeId = TargetTypeId(4);
    /// A trade.
    pub const TRADE: TargetTypeId = TargetTypeId(5);
    /// A security.
    pub const SECURITY: TargetTypeId = TargetTypeId(6);
    /// A trivial item fully described by its unique identifier.
    pub const PRIMITIVE: TargetTypeId = TargetTypeId(7);
    /// A currency.
    pub const CURRENCY: TargetTypeId = TargetTypeId(8);
    /// An unordered currency pair.
    pub const UNORDERED_CURRENCY_PAIR: TargetTypeId = TargetTypeId(9);
    /// A position or a trade; the built-in union of the two.
    pub const POSITION_OR_TRADE: TargetTypeId = TargetTypeId(10);
}

/// Interned identity of a union member list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetListId(pub u32);

/// Structural shape of a descriptor.
///
/// `Union` members are flattened (no union directly inside a union),
/// deduplicated, and sorted by id, so shape equality is set equality of the
/// alternatives. Operand ids always reference descriptors interned earlier,
/// which makes every descriptor a finite acyclic tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetTypeData {
    Null,
    Anything,
    Leaf(KindId),
    Nested(TargetTypeId, TargetTypeId),
    Union(TargetListId),
}
