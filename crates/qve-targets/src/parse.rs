//! Grammar parser for the textual target-type representation.
//!
//! ```text
//! type     := leafName | '(' type ')' | type '/' type | type '|' type
//! leafName := any run of characters excluding '/', '|', '(' and ')'
//! ```
//!
//! `/` denotes nesting (the right side is the more deeply nested element
//! type), `|` denotes union, parentheses group. Chained separators are
//! right-recursive: `A/B|C` reads as `A/(B|C)`.
//!
//! The parser is a single pass over byte indices; every structural token is
//! ASCII, so leaf names slice cleanly out of UTF-8 input. Malformed input
//! fails with the offending byte index and the full input for diagnostics;
//! an identifier that resolves to no registered kind fails separately as
//! `UnknownLeaf`. Unbalanced parentheses are rejected in both directions.
//!
//! `NULL` and `ANYTHING` are grammar keywords for the null and wildcard
//! descriptors; all other identifiers resolve through the kind registry.

use crate::error::TargetTypeError;
use crate::intern::TargetInterner;
use crate::types::TargetTypeId;

/// Grammar keyword for the null descriptor.
const NULL_KEYWORD: &str = "NULL";

/// Grammar keyword for the wildcard descriptor.
const ANYTHING_KEYWORD: &str = "ANYTHING";

impl TargetInterner {
    /// Parse a string produced by [`type_string`](Self::type_string),
    /// returning the canonical interned descriptor.
    pub fn parse_type(&self, input: &str) -> Result<TargetTypeId, TargetTypeError> {
        Parser {
            db: self,
            input,
            bytes: input.as_bytes(),
            index: 0,
        }
        .run()
    }
}

struct Parser<'a> {
    db: &'a TargetInterner,
    input: &'a str,
    bytes: &'a [u8],
    index: usize,
}

impl Parser<'_> {
    fn run(mut self) -> Result<TargetTypeId, TargetTypeError> {
        let ty = self.parse_expr(0)?;
        // At depth zero the scan only stops at end of input: ')' errors
        // and every other byte is consumed by some production.
        debug_assert_eq!(self.index, self.bytes.len());
        Ok(ty)
    }

    fn malformed(&self, index: usize) -> TargetTypeError {
        TargetTypeError::MalformedType {
            index,
            input: self.input.to_string(),
        }
    }

    fn is_identifier(byte: u8) -> bool {
        !matches!(byte, b'/' | b'|' | b'(' | b')')
    }

    /// Parse one type expression, stopping at end of input or, when inside
    /// parentheses, just before the closing `)` (consumed by the caller).
    fn parse_expr(&mut self, depth: u32) -> Result<TargetTypeId, TargetTypeError> {
        let mut ty: Option<TargetTypeId> = None;
        while self.index < self.bytes.len() {
            match self.bytes[self.index] {
                separator @ (b'/' | b'|') => {
                    let Some(left) = ty else {
                        return Err(self.malformed(self.index));
                    };
                    self.index += 1;
                    // Right-recursive: the rest of this group is the
                    // second operand.
                    let right = self.parse_expr(depth)?;
                    let combined = if separator == b'/' {
                        self.db.containing(left, right)?
                    } else {
                        self.db.or2(left, right)?
                    };
                    ty = Some(combined);
                }
                b'(' => {
                    if ty.is_some() {
                        return Err(self.malformed(self.index));
                    }
                    self.index += 1;
                    let inner = self.parse_expr(depth + 1)?;
                    // parse_expr at depth > 0 only returns at a ')'.
                    debug_assert_eq!(self.bytes.get(self.index), Some(&b')'));
                    self.index += 1;
                    ty = Some(inner);
                }
                b')' => {
                    if depth == 0 {
                        return Err(self.malformed(self.index));
                    }
                    return ty.ok_or_else(|| self.malformed(self.index));
                }
                _ => {
                    if ty.is_some() {
                        return Err(self.malformed(self.index));
                    }
                    ty = Some(self.parse_leaf()?);
                }
            }
        }
        if depth > 0 {
            // Unmatched '(' somewhere to the left.
            return Err(self.malformed(self.index));
        }
        ty.ok_or_else(|| self.malformed(self.index))
    }

    fn parse_leaf(&mut self) -> Result<TargetTypeId, TargetTypeError> {
        let start = self.index;
        while self.index < self.bytes.len() && Self::is_identifier(self.bytes[self.index]) {
            self.index += 1;
        }
        let name = &self.input[start..self.index];
        match name {
            NULL_KEYWORD => Ok(TargetTypeId::NULL),
            ANYTHING_KEYWORD => Ok(TargetTypeId::ANYTHING),
            _ => match self.db.kinds().by_name(name) {
                Some(kind) => self.db.leaf(kind),
                None => Err(TargetTypeError::UnknownLeaf {
                    name: name.to_string(),
                    index: start,
                    input: self.input.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
