//! Unique identifiers for engine-addressable objects.
//!
//! A `UniqueId` is a scheme/value pair with an optional version, printed as
//! `Scheme~Value` or `Scheme~Value~Version`. The engine treats identifiers
//! as opaque; only resolvers assign meaning to a scheme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the scheme, value, and version segments.
const SEPARATOR: char = '~';

/// Identifier of an object addressable by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniqueId {
    scheme: String,
    value: String,
    version: Option<String>,
}

impl UniqueId {
    /// Create an unversioned identifier. Panics on empty segments in debug
    /// builds; use `parse` for untrusted input.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        let scheme = scheme.into();
        let value = value.into();
        debug_assert!(!scheme.is_empty() && !value.is_empty());
        Self {
            scheme,
            value,
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Parse the `Scheme~Value[~Version]` form.
    pub fn parse(text: &str) -> Result<Self, UniqueIdParseError> {
        let mut parts = text.split(SEPARATOR);
        let scheme = parts.next().unwrap_or("");
        let value = parts.next().ok_or_else(|| UniqueIdParseError::new(text))?;
        let version = parts.next();
        if scheme.is_empty() || value.is_empty() || parts.next().is_some() {
            return Err(UniqueIdParseError::new(text));
        }
        if version == Some("") {
            return Err(UniqueIdParseError::new(text));
        }
        Ok(Self {
            scheme: scheme.to_string(),
            value: value.to_string(),
            version: version.map(str::to_string),
        })
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.scheme, self.value)?;
        if let Some(version) = &self.version {
            write!(f, "{SEPARATOR}{version}")?;
        }
        Ok(())
    }
}

/// Input did not match `Scheme~Value[~Version]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueIdParseError {
    input: String,
}

impl UniqueIdParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for UniqueIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid unique identifier {:?}", self.input)
    }
}

impl std::error::Error for UniqueIdParseError {}
