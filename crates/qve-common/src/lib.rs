//! Common types and utilities for the QVE valuation engine.
//!
//! This crate provides foundational types used across all QVE crates:
//! - String interning (`Atom`, `Interner`)
//! - Unique identifiers (`UniqueId`)
//! - Money primitives (`Currency`, `UnorderedCurrencyPair`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Unique identifiers for engine-addressable objects
pub mod id;
pub use id::{UniqueId, UniqueIdParseError};

// Money primitives
pub mod money;
pub use money::{Currency, MoneyError, UnorderedCurrencyPair};
