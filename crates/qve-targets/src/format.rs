//! Textual projections of descriptors.
//!
//! Two projections share one bracketing scheme:
//!
//! - [`type_string`](TargetInterner::type_string) — the grammar-stable wire
//!   form, re-parseable by [`parse_type`](TargetInterner::parse_type). This
//!   is the only representation that crosses process boundaries.
//! - [`display_name`](TargetInterner::display_name) — the human-facing
//!   label, using registry display names. Never fed back to the parser.
//!
//! Composite operands are parenthesized, leaves are bare, so precedence
//! survives the round trip: a union inside a nested type prints as
//! `(POSITION|TRADE)/SECURITY`, never as `POSITION|TRADE/SECURITY`.

use crate::intern::TargetInterner;
use crate::kind::KindId;
use crate::types::{TargetTypeData, TargetTypeId};

/// Which leaf projection to print.
#[derive(Copy, Clone, PartialEq, Eq)]
enum LeafStyle {
    Grammar,
    Display,
}

impl TargetInterner {
    /// Grammar-stable string form; `parse_type(type_string(t))` returns the
    /// identical interned descriptor.
    pub fn type_string(&self, ty: TargetTypeId) -> String {
        let mut out = String::new();
        self.write_type(ty, LeafStyle::Grammar, false, &mut out);
        out
    }

    /// Human-facing display form.
    pub fn display_name(&self, ty: TargetTypeId) -> String {
        let mut out = String::new();
        self.write_type(ty, LeafStyle::Display, false, &mut out);
        out
    }

    fn write_leaf_name(&self, kind: KindId, style: LeafStyle, out: &mut String) {
        let name = match style {
            LeafStyle::Grammar => self.kinds().name(kind),
            LeafStyle::Display => self.kinds().display_name(kind),
        };
        match name {
            Some(name) => out.push_str(&name),
            None => out.push_str("<unknown>"),
        }
    }

    fn write_type(&self, ty: TargetTypeId, style: LeafStyle, operand: bool, out: &mut String) {
        match self.lookup(ty) {
            None => out.push_str("<invalid>"),
            Some(TargetTypeData::Null) => out.push_str(match style {
                LeafStyle::Grammar => "NULL",
                LeafStyle::Display => "Null",
            }),
            Some(TargetTypeData::Anything) => out.push_str(match style {
                LeafStyle::Grammar => "ANYTHING",
                LeafStyle::Display => "Anything",
            }),
            Some(TargetTypeData::Leaf(kind)) => self.write_leaf_name(kind, style, out),
            Some(TargetTypeData::Nested(outer, inner)) => {
                if operand {
                    out.push('(');
                }
                self.write_type(outer, style, true, out);
                out.push('/');
                self.write_type(inner, style, true, out);
                if operand {
                    out.push(')');
                }
            }
            Some(TargetTypeData::Union(list)) => {
                if operand {
                    out.push('(');
                }
                for (position, member) in self.target_list(list).iter().enumerate() {
                    if position > 0 {
                        out.push('|');
                    }
                    self.write_type(*member, style, true, out);
                }
                if operand {
                    out.push(')');
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
