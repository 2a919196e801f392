//! Visitor dispatch over descriptor shapes.
//!
//! External consumers specialize behavior per descriptor shape without
//! inspecting the representation: `accept` branches exhaustively over the
//! five variants and routes to one visitor method, threading an auxiliary
//! data value through to whichever branch fires.
//!
//! The extraction helpers below are thin visitors for the common "give me
//! the payload if it is that shape" queries.

use crate::intern::TargetInterner;
use crate::kind::KindId;
use crate::types::{TargetTypeData, TargetTypeId};

/// Shape-directed operation over a descriptor.
///
/// `Data` is the auxiliary value handed to `accept`; exactly one visit
/// method receives it.
pub trait TargetTypeVisitor {
    type Data;
    type Output;

    fn visit_null(&mut self, data: Self::Data) -> Self::Output;
    fn visit_anything(&mut self, data: Self::Data) -> Self::Output;
    fn visit_leaf(&mut self, kind: KindId, data: Self::Data) -> Self::Output;
    fn visit_nested(
        &mut self,
        outer: TargetTypeId,
        inner: TargetTypeId,
        data: Self::Data,
    ) -> Self::Output;
    fn visit_union(&mut self, members: &[TargetTypeId], data: Self::Data) -> Self::Output;
}

impl TargetInterner {
    /// Apply a visitor to a descriptor's shape.
    ///
    /// Panics if the id did not come from this interner; ids never escape
    /// the interner that minted them in correct code.
    pub fn accept<V: TargetTypeVisitor>(
        &self,
        ty: TargetTypeId,
        visitor: &mut V,
        data: V::Data,
    ) -> V::Output {
        let shape = self
            .lookup(ty)
            .expect("target type id not found in this interner");
        match shape {
            TargetTypeData::Null => visitor.visit_null(data),
            TargetTypeData::Anything => visitor.visit_anything(data),
            TargetTypeData::Leaf(kind) => visitor.visit_leaf(kind, data),
            TargetTypeData::Nested(outer, inner) => visitor.visit_nested(outer, inner, data),
            TargetTypeData::Union(list) => {
                let members = self.target_list(list);
                visitor.visit_union(&members, data)
            }
        }
    }
}

// ── Extraction helpers ──

/// The leaf kind, if the descriptor is a leaf.
pub fn leaf_kind(db: &TargetInterner, ty: TargetTypeId) -> Option<KindId> {
    match db.lookup(ty) {
        Some(TargetTypeData::Leaf(kind)) => Some(kind),
        _ => None,
    }
}

/// The (outer, inner) pair, if the descriptor is nested.
pub fn nested_parts(db: &TargetInterner, ty: TargetTypeId) -> Option<(TargetTypeId, TargetTypeId)> {
    match db.lookup(ty) {
        Some(TargetTypeData::Nested(outer, inner)) => Some((outer, inner)),
        _ => None,
    }
}

/// The flattened alternatives, if the descriptor is a union.
pub fn union_members(db: &TargetInterner, ty: TargetTypeId) -> Option<Vec<TargetTypeId>> {
    match db.lookup(ty) {
        Some(TargetTypeData::Union(list)) => Some(db.target_list(list).to_vec()),
        _ => None,
    }
}

pub fn is_union_type(db: &TargetInterner, ty: TargetTypeId) -> bool {
    matches!(db.lookup(ty), Some(TargetTypeData::Union(_)))
}

pub fn is_leaf_type(db: &TargetInterner, ty: TargetTypeId) -> bool {
    matches!(db.lookup(ty), Some(TargetTypeData::Leaf(_)))
}

pub fn is_nested_type(db: &TargetInterner, ty: TargetTypeId) -> bool {
    matches!(db.lookup(ty), Some(TargetTypeData::Nested(_, _)))
}

#[cfg(test)]
#[path = "tests/visitor_tests.rs"]
mod tests;
