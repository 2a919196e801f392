//! Error types for the target-type algebra.
//!
//! Every operation in this crate is total over well-formed input and fails
//! fast over ill-formed input; there are no retries and no partial states.

use std::fmt;

/// Failure raised by descriptor construction or parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetTypeError {
    /// An absent or unregistered operand was passed to a constructor or
    /// composition call. Always a programming error in the caller.
    InvalidArgument(&'static str),

    /// Textual input does not conform to the target-type grammar. Carries
    /// the byte index of the offending character and the full input.
    MalformedType { index: usize, input: String },

    /// A grammar leaf name did not resolve to any registered runtime kind.
    /// Distinct from `MalformedType` so callers can tell bad syntax from
    /// unrecognized vocabulary.
    UnknownLeaf {
        name: String,
        index: usize,
        input: String,
    },
}

impl fmt::Display for TargetTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetTypeError::InvalidArgument(message) => {
                write!(f, "invalid argument: {message}")
            }
            TargetTypeError::MalformedType { index, input } => {
                write!(f, "malformed target type at index {index} of {input:?}")
            }
            TargetTypeError::UnknownLeaf { name, index, input } => {
                write!(
                    f,
                    "unknown leaf kind {name:?} at index {index} of {input:?}"
                )
            }
        }
    }
}

impl std::error::Error for TargetTypeError {}

/// Failure raised by runtime-kind registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KindRegistryError {
    /// A declared parent kind has not been registered yet. Parents must
    /// exist before their refinements, which keeps the hierarchy acyclic.
    UnknownParent,

    /// An empty kind name was supplied.
    EmptyName,
}

impl fmt::Display for KindRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindRegistryError::UnknownParent => {
                f.write_str("parent kind is not registered")
            }
            KindRegistryError::EmptyName => f.write_str("kind name must not be empty"),
        }
    }
}

impl std::error::Error for KindRegistryError {}
