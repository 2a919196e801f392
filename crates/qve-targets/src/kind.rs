//! Runtime kinds and the kind registry.
//!
//! A *kind* identifies what sort of concrete object a computation target
//! is: a security, a position, a currency. Leaf descriptors wrap a `KindId`;
//! the registry owns the kind vocabulary, the refinement hierarchy between
//! kinds, and the resolver capability attached to primitive kinds.
//!
//! Leaf identity is the `KindId`, never the name: two registrations with a
//! colliding name produce two distinct kinds, and only the first one is
//! reachable from the grammar (name lookups keep the first registrant).

use crate::error::KindRegistryError;
use crate::resolver::ObjectResolver;
use dashmap::DashMap;
use qve_common::interner::{Atom, Interner};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Identity of a runtime kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub u32);

impl KindId {
    /// Sentinel for "no kind"; never registered. Constructing a leaf from
    /// it fails with `InvalidArgument`.
    pub const INVALID: KindId = KindId(0);

    pub const PORTFOLIO: KindId = KindId(1);
    pub const PORTFOLIO_NODE: KindId = KindId(2);
    pub const POSITION: KindId = KindId(3);
    pub const TRADE: KindId = KindId(4);
    pub const SECURITY: KindId = KindId(5);
    pub const PRIMITIVE: KindId = KindId(6);
    pub const CURRENCY: KindId = KindId(7);
    pub const UNORDERED_CURRENCY_PAIR: KindId = KindId(8);

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Registered data for one kind.
#[derive(Clone)]
pub struct KindInfo {
    /// Grammar-stable identifier, e.g. `SECURITY`.
    pub name: Atom,
    /// Human-facing label, e.g. `Security`. Never fed to the parser.
    pub display_name: Atom,
    /// Direct refinement parents. Always already-registered kinds.
    pub parents: Vec<KindId>,
    /// Identifier-to-instance capability for primitive kinds. Stored, never
    /// invoked by this crate.
    pub resolver: Option<Arc<dyn ObjectResolver>>,
}

/// Registry of runtime kinds.
///
/// Registration is append-only and concurrent. Parents must be registered
/// before their refinements, which makes the hierarchy acyclic by
/// construction and keeps `is_refinement_of` a bounded walk.
pub struct KindRegistry {
    strings: Interner,
    by_name: DashMap<Atom, KindId, rustc_hash::FxBuildHasher>,
    kinds: RwLock<Vec<KindInfo>>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self {
            strings: Interner::new(),
            by_name: DashMap::with_hasher(rustc_hash::FxBuildHasher),
            kinds: RwLock::new(Vec::new()),
        }
    }

    /// Register a kind and return its identity.
    ///
    /// The name enters the grammar vocabulary only if no earlier kind
    /// claimed it; colliding registrations still get a distinct `KindId`.
    pub fn register(
        &self,
        name: &str,
        display_name: &str,
        parents: &[KindId],
        resolver: Option<Arc<dyn ObjectResolver>>,
    ) -> Result<KindId, KindRegistryError> {
        if name.is_empty() {
            return Err(KindRegistryError::EmptyName);
        }
        let name_atom = self.strings.intern(name);
        let display_atom = self.strings.intern(display_name);

        let mut kinds = self.kinds.write().expect("kind registry poisoned");
        for parent in parents {
            if !parent.is_valid() || parent.0 as usize > kinds.len() {
                return Err(KindRegistryError::UnknownParent);
            }
        }
        kinds.push(KindInfo {
            name: name_atom,
            display_name: display_atom,
            parents: parents.to_vec(),
            resolver,
        });
        let id = KindId(kinds.len() as u32);
        // First registrant wins the grammar name; inserting before the
        // write lock drops keeps name lookups consistent with id order.
        self.by_name.entry(name_atom).or_insert(id);
        drop(kinds);

        debug!(kind = name, id = id.0, "registered runtime kind");
        Ok(id)
    }

    fn info(&self, kind: KindId) -> Option<KindInfo> {
        if !kind.is_valid() {
            return None;
        }
        let kinds = self.kinds.read().expect("kind registry poisoned");
        kinds.get(kind.0 as usize - 1).cloned()
    }

    pub fn is_registered(&self, kind: KindId) -> bool {
        let kinds = self.kinds.read().expect("kind registry poisoned");
        kind.is_valid() && kind.0 as usize <= kinds.len()
    }

    /// Grammar-stable name of a kind.
    pub fn name(&self, kind: KindId) -> Option<Arc<str>> {
        self.info(kind).map(|info| self.strings.resolve(info.name))
    }

    /// Human-facing display name of a kind.
    pub fn display_name(&self, kind: KindId) -> Option<Arc<str>> {
        self.info(kind)
            .map(|info| self.strings.resolve(info.display_name))
    }

    /// Resolver capability attached to a kind, if any.
    pub fn resolver(&self, kind: KindId) -> Option<Arc<dyn ObjectResolver>> {
        self.info(kind).and_then(|info| info.resolver)
    }

    /// Look up a kind by grammar name.
    pub fn by_name(&self, name: &str) -> Option<KindId> {
        let atom = self.strings.get(name)?;
        self.by_name.get(&atom).map(|entry| *entry)
    }

    /// True if `sub` is a strict refinement (transitive sub-kind) of
    /// `ancestor`.
    pub fn is_refinement_of(&self, sub: KindId, ancestor: KindId) -> bool {
        let Some(info) = self.info(sub) else {
            return false;
        };
        // Parents always have smaller ids, so the walk terminates.
        info.parents.iter().any(|parent| {
            *parent == ancestor || self.is_refinement_of(*parent, ancestor)
        })
    }

    /// True if `sub` is `ancestor` or a refinement of it. The relation the
    /// compatibility engine uses for leaf matching.
    pub fn is_same_or_refinement(&self, sub: KindId, ancestor: KindId) -> bool {
        (sub == ancestor && self.is_registered(sub)) || self.is_refinement_of(sub, ancestor)
    }

    pub fn len(&self) -> usize {
        self.kinds.read().expect("kind registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/kind_tests.rs"]
mod tests;
