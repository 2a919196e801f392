//! Compatibility and leaf-matching predicates.
//!
//! Three compatibility queries, one per right-hand shape: a concrete
//! object, a candidate descriptor, or a bare runtime kind. All are pure;
//! recursion is bounded because descriptor trees are acyclic by
//! construction (operands are interned before their composites).
//!
//! Matching rules by left-hand variant:
//! - `Leaf` accepts the same kind or a refinement of it
//! - `Nested` requires a nested candidate with compatible outer and inner;
//!   a concrete object or kind is matched through the inner type, since the
//!   element is the actual target and the outer is aggregation context
//! - `Union` accepts if any alternative accepts (first alternative first)
//! - `Anything` accepts every leaf, object, and kind, and every candidate
//!   descriptor except `Null`
//! - `Null` accepts only the null descriptor, never an object or kind

use crate::intern::TargetInterner;
use crate::kind::KindId;
use crate::object::TargetObject;
use crate::types::{TargetTypeData, TargetTypeId};

impl TargetInterner {
    /// Is the concrete object valid for this descriptor?
    pub fn is_compatible_object(&self, ty: TargetTypeId, object: &dyn TargetObject) -> bool {
        self.is_compatible_kind(ty, object.target_kind())
    }

    /// Is the bare runtime kind valid for this descriptor?
    pub fn is_compatible_kind(&self, ty: TargetTypeId, kind: KindId) -> bool {
        match self.lookup(ty) {
            Some(TargetTypeData::Null) => false,
            Some(TargetTypeData::Anything) => self.kinds().is_registered(kind),
            Some(TargetTypeData::Leaf(leaf)) => self.kinds().is_same_or_refinement(kind, leaf),
            Some(TargetTypeData::Nested(_, inner)) => self.is_compatible_kind(inner, kind),
            Some(TargetTypeData::Union(list)) => self
                .target_list(list)
                .iter()
                .any(|member| self.is_compatible_kind(*member, kind)),
            None => false,
        }
    }

    /// Is the candidate descriptor compatible with this descriptor?
    ///
    /// Every alternative of a candidate union must be accepted (the
    /// candidate could be any of them); a nested candidate requires the
    /// outer kind to match or refine at every nesting level.
    pub fn is_compatible_type(&self, ty: TargetTypeId, candidate: TargetTypeId) -> bool {
        if ty == candidate {
            // Interning makes equal shapes identical, so identity answers
            // the reflexive case without recursion.
            return self.lookup(ty).is_some();
        }
        if let Some(TargetTypeData::Union(list)) = self.lookup(candidate) {
            return self
                .target_list(list)
                .iter()
                .all(|member| self.is_compatible_type(ty, *member));
        }
        match self.lookup(ty) {
            Some(TargetTypeData::Null) => false, // only NULL itself, handled above
            Some(TargetTypeData::Anything) => {
                candidate != TargetTypeId::NULL && self.lookup(candidate).is_some()
            }
            Some(TargetTypeData::Leaf(leaf)) => match self.lookup(candidate) {
                Some(TargetTypeData::Leaf(kind)) => {
                    self.kinds().is_same_or_refinement(kind, leaf)
                }
                _ => false,
            },
            Some(TargetTypeData::Nested(outer, inner)) => match self.lookup(candidate) {
                Some(TargetTypeData::Nested(candidate_outer, candidate_inner)) => {
                    self.is_compatible_type(outer, candidate_outer)
                        && self.is_compatible_type(inner, candidate_inner)
                }
                _ => false,
            },
            Some(TargetTypeData::Union(list)) => self
                .target_list(list)
                .iter()
                .any(|member| self.is_compatible_type(*member, candidate)),
            None => false,
        }
    }

    /// Does this descriptor's leaf identity match the queried descriptor?
    ///
    /// The dual of `is_compatible_type`, used when a function declares the
    /// kind it operates on and the caller has no concrete instance in hand.
    /// Composites recurse to the leaves that could actually be targeted:
    /// any union alternative, the inner type of a nested descriptor.
    pub fn is_target_type(&self, ty: TargetTypeId, queried: TargetTypeId) -> bool {
        match self.lookup(ty) {
            Some(TargetTypeData::Nested(_, inner)) => self.is_target_type(inner, queried),
            Some(TargetTypeData::Union(list)) => self
                .target_list(list)
                .iter()
                .any(|member| self.is_target_type(*member, queried)),
            Some(_) => self.is_compatible_type(queried, ty),
            None => false,
        }
    }

    /// Does this descriptor's leaf identity match the queried kind?
    pub fn is_target_kind(&self, ty: TargetTypeId, kind: KindId) -> bool {
        match self.lookup(ty) {
            Some(TargetTypeData::Leaf(leaf)) => self.kinds().is_same_or_refinement(leaf, kind),
            Some(TargetTypeData::Nested(_, inner)) => self.is_target_kind(inner, kind),
            Some(TargetTypeData::Union(list)) => self
                .target_list(list)
                .iter()
                .any(|member| self.is_target_kind(*member, kind)),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/compat_tests.rs"]
mod tests;
