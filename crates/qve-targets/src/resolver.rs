//! Identifier-to-instance resolvers.
//!
//! A resolver turns a `UniqueId` into a concrete instance of one runtime
//! kind. Primitive kinds carry a resolver capability in the kind registry;
//! the algebra stores the capability and leaves invocation to callers that
//! have already established compatibility.

use crate::kind::KindId;
use crate::object::{Primitive, TargetObject};
use qve_common::{Currency, UniqueId, UnorderedCurrencyPair};
use std::sync::Arc;

/// Resolves identifiers into concrete instances of one kind.
pub trait ObjectResolver: Send + Sync {
    /// Resolve an identifier, or `None` if it does not name an instance of
    /// this resolver's kind.
    fn resolve(&self, id: &UniqueId) -> Option<Arc<dyn TargetObject>>;
}

/// Identifier scheme for ISO currencies.
pub const CURRENCY_SCHEME: &str = "CurrencyISO";

/// Identifier scheme for unordered currency pairs.
pub const CURRENCY_PAIR_SCHEME: &str = "UnorderedCurrencyPair";

/// Resolves any identifier to a `Primitive` wrapping it.
#[derive(Debug, Default)]
pub struct PrimitiveResolver;

impl ObjectResolver for PrimitiveResolver {
    fn resolve(&self, id: &UniqueId) -> Option<Arc<dyn TargetObject>> {
        Some(Arc::new(Primitive::new(id.clone())))
    }
}

/// Resolves `CurrencyISO~XXX` identifiers to `Currency` instances.
#[derive(Debug, Default)]
pub struct CurrencyResolver;

impl ObjectResolver for CurrencyResolver {
    fn resolve(&self, id: &UniqueId) -> Option<Arc<dyn TargetObject>> {
        if id.scheme() != CURRENCY_SCHEME {
            return None;
        }
        let currency = Currency::of(id.value()).ok()?;
        Some(Arc::new(currency))
    }
}

/// Resolves `UnorderedCurrencyPair~XXXYYY` identifiers to pair instances.
#[derive(Debug, Default)]
pub struct UnorderedCurrencyPairResolver;

impl ObjectResolver for UnorderedCurrencyPairResolver {
    fn resolve(&self, id: &UniqueId) -> Option<Arc<dyn TargetObject>> {
        if id.scheme() != CURRENCY_PAIR_SCHEME {
            return None;
        }
        let pair = UnorderedCurrencyPair::parse(id.value()).ok()?;
        Some(Arc::new(pair))
    }
}

impl TargetObject for Currency {
    fn unique_id(&self) -> UniqueId {
        UniqueId::of(CURRENCY_SCHEME, self.code())
    }

    fn target_kind(&self) -> KindId {
        KindId::CURRENCY
    }
}

impl TargetObject for UnorderedCurrencyPair {
    fn unique_id(&self) -> UniqueId {
        UniqueId::of(CURRENCY_PAIR_SCHEME, self.to_string())
    }

    fn target_kind(&self) -> KindId {
        KindId::UNORDERED_CURRENCY_PAIR
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
