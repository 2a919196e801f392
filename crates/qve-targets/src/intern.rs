//! Descriptor interning and composition.
//!
//! The interner is the canonical store for target-type descriptors: equal
//! shapes resolve to one `TargetTypeId`, across repeated and concurrent
//! requests. It is the only mutable state in the subsystem, append-only,
//! with no reset operation; entries live for the interner's lifetime.
//!
//! All construction funnels through here — the built-in constants, the
//! composition operators (`containing`, `or2`, `union`), and the grammar
//! parser — so identity equality and structural equality coincide
//! everywhere downstream.

use crate::error::TargetTypeError;
use crate::kind::{KindId, KindRegistry};
use crate::resolver::{
    CurrencyResolver, ObjectResolver, PrimitiveResolver, UnorderedCurrencyPairResolver,
};
use crate::types::{TargetListId, TargetTypeData, TargetTypeId};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};
use tracing::trace;

/// Canonical store for target-type descriptors.
pub struct TargetInterner {
    kinds: KindRegistry,
    map: DashMap<TargetTypeData, TargetTypeId, FxBuildHasher>,
    storage: RwLock<Vec<TargetTypeData>>,
    list_map: DashMap<Arc<[TargetTypeId]>, TargetListId, FxBuildHasher>,
    list_storage: RwLock<Vec<Arc<[TargetTypeId]>>>,
}

impl TargetInterner {
    /// Create an interner with the built-in kinds and descriptors
    /// pre-registered at their constant ids.
    pub fn new() -> Self {
        let interner = Self {
            kinds: KindRegistry::new(),
            map: DashMap::with_hasher(FxBuildHasher),
            storage: RwLock::new(Vec::new()),
            list_map: DashMap::with_hasher(FxBuildHasher),
            list_storage: RwLock::new(Vec::new()),
        };
        interner.register_builtins();
        interner
    }

    fn register_builtins(&self) {
        // Registration order pins the KindId constants.
        let builtin_kinds: [(&str, &str, KindId); 8] = [
            ("PORTFOLIO", "Portfolio", KindId::PORTFOLIO),
            ("PORTFOLIO_NODE", "PortfolioNode", KindId::PORTFOLIO_NODE),
            ("POSITION", "Position", KindId::POSITION),
            ("TRADE", "Trade", KindId::TRADE),
            ("SECURITY", "Security", KindId::SECURITY),
            ("PRIMITIVE", "Primitive", KindId::PRIMITIVE),
            ("CURRENCY", "Currency", KindId::CURRENCY),
            (
                "UNORDERED_CURRENCY_PAIR",
                "UnorderedCurrencyPair",
                KindId::UNORDERED_CURRENCY_PAIR,
            ),
        ];
        for (name, display, expected) in builtin_kinds {
            let resolver: Option<Arc<dyn ObjectResolver>> = match expected {
                KindId::PRIMITIVE => Some(Arc::new(PrimitiveResolver)),
                KindId::CURRENCY => Some(Arc::new(CurrencyResolver)),
                KindId::UNORDERED_CURRENCY_PAIR => Some(Arc::new(UnorderedCurrencyPairResolver)),
                _ => None,
            };
            let id = self
                .kinds
                .register(name, display, &[], resolver)
                .expect("built-in kind registration cannot fail");
            debug_assert_eq!(id, expected);
        }

        // Interning order pins the TargetTypeId constants.
        let null = self.intern(TargetTypeData::Null);
        debug_assert_eq!(null, TargetTypeId::NULL);
        let anything = self.intern(TargetTypeData::Anything);
        debug_assert_eq!(anything, TargetTypeId::ANYTHING);
        let leaf_kinds = [
            (KindId::PORTFOLIO, TargetTypeId::PORTFOLIO),
            (KindId::PORTFOLIO_NODE, TargetTypeId::PORTFOLIO_NODE),
            (KindId::POSITION, TargetTypeId::POSITION),
            (KindId::TRADE, TargetTypeId::TRADE),
            (KindId::SECURITY, TargetTypeId::SECURITY),
            (KindId::PRIMITIVE, TargetTypeId::PRIMITIVE),
            (KindId::CURRENCY, TargetTypeId::CURRENCY),
            (
                KindId::UNORDERED_CURRENCY_PAIR,
                TargetTypeId::UNORDERED_CURRENCY_PAIR,
            ),
        ];
        for (kind, expected) in leaf_kinds {
            let id = self.intern(TargetTypeData::Leaf(kind));
            debug_assert_eq!(id, expected);
        }
        let position_or_trade = self
            .union(&[TargetTypeId::POSITION, TargetTypeId::TRADE])
            .expect("built-in union construction cannot fail");
        debug_assert_eq!(position_or_trade, TargetTypeId::POSITION_OR_TRADE);
    }

    /// The runtime-kind registry backing leaf descriptors.
    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    /// Intern a shape, returning the canonical id.
    ///
    /// Insert-if-absent on the concurrent map: a race between two threads
    /// building the same shape converges on one winning id returned to both.
    pub(crate) fn intern(&self, data: TargetTypeData) -> TargetTypeId {
        if let Some(id) = self.map.get(&data) {
            return *id;
        }
        // The entry shard lock makes push-then-publish atomic per shape: an
        // id is never observable before its storage slot exists.
        *self.map.entry(data).or_insert_with(|| {
            let mut storage = self.storage.write().expect("target interner poisoned");
            storage.push(data);
            let id = TargetTypeId((storage.len() - 1) as u32);
            trace!(?data, id = id.0, "interned target type");
            id
        })
    }

    /// Structural shape of a descriptor, or `None` if the id did not come
    /// from this interner.
    pub fn lookup(&self, id: TargetTypeId) -> Option<TargetTypeData> {
        let storage = self.storage.read().expect("target interner poisoned");
        storage.get(id.0 as usize).copied()
    }

    /// Members of an interned union list.
    pub fn target_list(&self, id: TargetListId) -> Arc<[TargetTypeId]> {
        let storage = self.list_storage.read().expect("target interner poisoned");
        storage
            .get(id.0 as usize)
            .cloned()
            .expect("target list id not found in this interner")
    }

    fn intern_list(&self, members: &[TargetTypeId]) -> TargetListId {
        if let Some(id) = self.list_map.get(members) {
            return *id;
        }
        let key: Arc<[TargetTypeId]> = Arc::from(members);
        *self.list_map.entry(key.clone()).or_insert_with(|| {
            let mut storage = self.list_storage.write().expect("target interner poisoned");
            storage.push(key.clone());
            TargetListId((storage.len() - 1) as u32)
        })
    }

    fn check_operand(&self, id: TargetTypeId) -> Result<(), TargetTypeError> {
        let storage = self.storage.read().expect("target interner poisoned");
        if (id.0 as usize) < storage.len() {
            Ok(())
        } else {
            Err(TargetTypeError::InvalidArgument(
                "operand is not a descriptor of this interner",
            ))
        }
    }

    /// Canonical leaf descriptor for a registered runtime kind.
    pub fn leaf(&self, kind: KindId) -> Result<TargetTypeId, TargetTypeError> {
        if !self.kinds.is_registered(kind) {
            return Err(TargetTypeError::InvalidArgument(
                "leaf kind must be a registered runtime kind",
            ));
        }
        Ok(self.intern(TargetTypeData::Leaf(kind)))
    }

    /// Canonical nested descriptor: a container of `outer` whose elements
    /// satisfy `inner`.
    pub fn containing(
        &self,
        outer: TargetTypeId,
        inner: TargetTypeId,
    ) -> Result<TargetTypeId, TargetTypeError> {
        self.check_operand(outer)?;
        self.check_operand(inner)?;
        Ok(self.intern(TargetTypeData::Nested(outer, inner)))
    }

    /// Canonical union of two alternatives. `or2(a, b)` and `or2(b, a)`
    /// intern to the identical descriptor.
    pub fn or2(
        &self,
        a: TargetTypeId,
        b: TargetTypeId,
    ) -> Result<TargetTypeId, TargetTypeError> {
        self.union(&[a, b])
    }

    /// Canonical union of any number of alternatives.
    ///
    /// Normalization: union members are flattened into the top level,
    /// deduplicated, and sorted by id. A single surviving alternative
    /// collapses to that descriptor itself.
    pub fn union(&self, members: &[TargetTypeId]) -> Result<TargetTypeId, TargetTypeError> {
        if members.is_empty() {
            return Err(TargetTypeError::InvalidArgument(
                "union requires at least one alternative",
            ));
        }
        let mut flat: SmallVec<[TargetTypeId; 8]> = SmallVec::new();
        for member in members {
            self.check_operand(*member)?;
            match self.lookup(*member) {
                Some(TargetTypeData::Union(list)) => {
                    // Nested union members are already flat and valid.
                    flat.extend(self.target_list(list).iter().copied());
                }
                _ => flat.push(*member),
            }
        }
        flat.sort_unstable();
        flat.dedup();
        if flat.len() == 1 {
            return Ok(flat[0]);
        }
        let list = self.intern_list(&flat);
        Ok(self.intern(TargetTypeData::Union(list)))
    }

    /// Number of interned descriptors, the built-ins included.
    pub fn len(&self) -> usize {
        self.storage.read().expect("target interner poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TargetInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod tests;
