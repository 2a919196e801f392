//! String interning.
//!
//! Interning maps equal strings to a single `Atom`, making equality and
//! hashing of names O(1). The interner is append-only and safe to share
//! across threads; atoms stay valid for the interner's lifetime.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::{Arc, RwLock};

/// Interned string handle.
///
/// Atoms are only meaningful relative to the `Interner` that produced them;
/// comparing atoms from different interners is a programming error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

/// Append-only concurrent string interner.
///
/// Lookups hit a concurrent map keyed by string content; storage is an
/// append-only vector indexed by `Atom`. A racing insert of the same string
/// converges on one atom via insert-if-absent on the map shard.
pub struct Interner {
    map: DashMap<Arc<str>, Atom, FxBuildHasher>,
    storage: RwLock<Vec<Arc<str>>>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            map: DashMap::with_hasher(FxBuildHasher),
            storage: RwLock::new(Vec::new()),
        }
    }

    /// Intern a string, returning its canonical atom.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(atom) = self.map.get(text) {
            return *atom;
        }
        let key: Arc<str> = Arc::from(text);
        // The entry shard lock makes the push-then-publish atomic per key:
        // an atom is never observable before its storage slot exists.
        *self.map.entry(key.clone()).or_insert_with(|| {
            let mut storage = self.storage.write().expect("interner storage poisoned");
            storage.push(key.clone());
            Atom((storage.len() - 1) as u32)
        })
    }

    /// Resolve an atom back to its string.
    ///
    /// Panics if the atom did not come from this interner.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let storage = self.storage.read().expect("interner storage poisoned");
        storage
            .get(atom.0 as usize)
            .cloned()
            .expect("atom not found in this interner")
    }

    /// Look up an already-interned string without inserting it.
    pub fn get(&self, text: &str) -> Option<Atom> {
        self.map.get(text).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.storage.read().expect("interner storage poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates() {
        let interner = Interner::new();
        let a = interner.intern("SECURITY");
        let b = interner.intern("SECURITY");
        let c = interner.intern("POSITION");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn resolve_round_trips() {
        let interner = Interner::new();
        let atom = interner.intern("PORTFOLIO_NODE");
        assert_eq!(&*interner.resolve(atom), "PORTFOLIO_NODE");
    }

    #[test]
    fn get_does_not_insert() {
        let interner = Interner::new();
        assert_eq!(interner.get("TRADE"), None);
        let atom = interner.intern("TRADE");
        assert_eq!(interner.get("TRADE"), Some(atom));
        assert_eq!(interner.len(), 1);
    }
}
