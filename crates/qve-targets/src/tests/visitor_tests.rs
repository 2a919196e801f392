use super::*;
use crate::TargetInterner;

/// Tags each shape with a static label; `Data` carries a prefix through to
/// whichever branch fires.
struct ShapeTagger;

impl TargetTypeVisitor for ShapeTagger {
    type Data = &'static str;
    type Output = String;

    fn visit_null(&mut self, prefix: Self::Data) -> String {
        format!("{prefix}:null")
    }

    fn visit_anything(&mut self, prefix: Self::Data) -> String {
        format!("{prefix}:anything")
    }

    fn visit_leaf(&mut self, kind: KindId, prefix: Self::Data) -> String {
        format!("{prefix}:leaf:{}", kind.0)
    }

    fn visit_nested(
        &mut self,
        _outer: TargetTypeId,
        _inner: TargetTypeId,
        prefix: Self::Data,
    ) -> String {
        format!("{prefix}:nested")
    }

    fn visit_union(&mut self, members: &[TargetTypeId], prefix: Self::Data) -> String {
        format!("{prefix}:union:{}", members.len())
    }
}

#[test]
fn accept_dispatches_exhaustively() {
    let db = TargetInterner::new();
    let mut visitor = ShapeTagger;

    assert_eq!(db.accept(TargetTypeId::NULL, &mut visitor, "t"), "t:null");
    assert_eq!(
        db.accept(TargetTypeId::ANYTHING, &mut visitor, "t"),
        "t:anything"
    );
    assert_eq!(
        db.accept(TargetTypeId::SECURITY, &mut visitor, "t"),
        format!("t:leaf:{}", KindId::SECURITY.0)
    );

    let nested = db
        .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION)
        .unwrap();
    assert_eq!(db.accept(nested, &mut visitor, "t"), "t:nested");
    assert_eq!(
        db.accept(TargetTypeId::POSITION_OR_TRADE, &mut visitor, "t"),
        "t:union:2"
    );
}

/// Counts leaves by recursing through composite shapes, exercising a
/// stateful visitor whose data value is threaded per call.
struct LeafCounter<'a> {
    db: &'a TargetInterner,
    leaves: usize,
}

impl TargetTypeVisitor for LeafCounter<'_> {
    type Data = ();
    type Output = ();

    fn visit_null(&mut self, _data: ()) {}

    fn visit_anything(&mut self, _data: ()) {}

    fn visit_leaf(&mut self, _kind: KindId, _data: ()) {
        self.leaves += 1;
    }

    fn visit_nested(&mut self, outer: TargetTypeId, inner: TargetTypeId, _data: ()) {
        let db = self.db;
        db.accept(outer, self, ());
        db.accept(inner, self, ());
    }

    fn visit_union(&mut self, members: &[TargetTypeId], _data: ()) {
        let db = self.db;
        for member in members {
            db.accept(*member, self, ());
        }
    }
}

#[test]
fn visitors_can_recurse() {
    let db = TargetInterner::new();
    let nested_union = db
        .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION_OR_TRADE)
        .unwrap();
    let ty = db.or2(nested_union, TargetTypeId::CURRENCY).unwrap();

    let mut counter = LeafCounter { db: &db, leaves: 0 };
    db.accept(ty, &mut counter, ());
    // PORTFOLIO_NODE, POSITION, TRADE, CURRENCY.
    assert_eq!(counter.leaves, 4);
}

#[test]
fn extraction_helpers_match_one_shape_each() {
    let db = TargetInterner::new();
    let nested = db
        .containing(TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION)
        .unwrap();

    assert_eq!(leaf_kind(&db, TargetTypeId::SECURITY), Some(KindId::SECURITY));
    assert_eq!(leaf_kind(&db, nested), None);
    assert_eq!(leaf_kind(&db, TargetTypeId::ANYTHING), None);

    assert_eq!(
        nested_parts(&db, nested),
        Some((TargetTypeId::PORTFOLIO_NODE, TargetTypeId::POSITION))
    );
    assert_eq!(nested_parts(&db, TargetTypeId::SECURITY), None);

    assert_eq!(
        union_members(&db, TargetTypeId::POSITION_OR_TRADE),
        Some(vec![TargetTypeId::POSITION, TargetTypeId::TRADE])
    );
    assert_eq!(union_members(&db, nested), None);

    assert!(is_leaf_type(&db, TargetTypeId::TRADE));
    assert!(!is_leaf_type(&db, TargetTypeId::NULL));
    assert!(is_nested_type(&db, nested));
    assert!(is_union_type(&db, TargetTypeId::POSITION_OR_TRADE));
    assert!(!is_union_type(&db, nested));
}
