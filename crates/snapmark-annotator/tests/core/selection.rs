use snapmark_annotator::{
    AnnotationItem, Background, Command, Document, ItemDetail, ItemModifier, Shape,
};
use snapmark_core::{Grab, Handle, ItemId, Point, Rect, StyleProperties};

fn document_with(items: &[(Rect, ItemDetail)]) -> (Document, Vec<ItemId>) {
    let mut doc = Document::new(Background::new(300.0, 300.0));
    let mut ids = Vec::new();
    for (rect, detail) in items {
        let id = doc.allocate_id();
        doc.push(AnnotationItem::new(
            id,
            Shape::frame(rect),
            StyleProperties::default(),
            detail.clone(),
        ))
        .unwrap();
        ids.push(id);
    }
    (doc, ids)
}

#[test]
fn test_midpoint_resize_moves_one_edge() {
    let (mut doc, ids) = document_with(&[(Rect::new(10.0, 10.0, 40.0, 30.0), ItemDetail::Rectangle)]);
    let mut modifier = ItemModifier::new();
    modifier.select(ids[0]);

    let grab = modifier.press(&doc, Point::new(50.0, 25.0));
    assert_eq!(grab, Some(Grab::Handle(Handle::Right)));
    modifier.drag_to(&mut doc, Point::new(80.0, 200.0));
    assert_eq!(doc.items()[0].bounds(), Rect::new(10.0, 10.0, 70.0, 30.0));

    match modifier.release(&doc) {
        Some(Command::ModifyItem { before, after }) => {
            assert_eq!(before.bounds(), Rect::new(10.0, 10.0, 40.0, 30.0));
            assert_eq!(after.bounds(), Rect::new(10.0, 10.0, 70.0, 30.0));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_resize_past_opposite_edge_mirrors() {
    let (mut doc, ids) = document_with(&[(Rect::new(10.0, 10.0, 40.0, 30.0), ItemDetail::Rectangle)]);
    let mut modifier = ItemModifier::new();
    modifier.select(ids[0]);
    modifier.press(&doc, Point::new(10.0, 25.0));
    modifier.drag_to(&mut doc, Point::new(70.0, 25.0));
    assert_eq!(doc.items()[0].bounds(), Rect::new(50.0, 10.0, 20.0, 30.0));
}

#[test]
fn test_badges_are_moved_not_resized() {
    let (doc, ids) = document_with(&[(
        Rect::new(10.0, 10.0, 40.0, 40.0),
        ItemDetail::NumberBadge { number: 1 },
    )]);
    let mut modifier = ItemModifier::new();
    modifier.select(ids[0]);
    assert_eq!(modifier.press(&doc, Point::new(10.0, 10.0)), Some(Grab::Move));
    assert_eq!(modifier.handles(&doc), None);
}

#[test]
fn test_remove_selected_captures_index() {
    let (doc, ids) = document_with(&[
        (Rect::new(0.0, 0.0, 10.0, 10.0), ItemDetail::Rectangle),
        (Rect::new(20.0, 0.0, 10.0, 10.0), ItemDetail::Ellipse),
    ]);
    let mut modifier = ItemModifier::new();
    modifier.select(ids[1]);
    match modifier.remove_selected(&doc) {
        Some(Command::RemoveItem { item, index }) => {
            assert_eq!(item.id, ids[1]);
            assert_eq!(index, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_line_hit_uses_stroke_distance() {
    let mut doc = Document::new(Background::new(300.0, 300.0));
    let id = doc.allocate_id();
    doc.push(AnnotationItem::new(
        id,
        Shape::Segment {
            start: Point::new(0.0, 0.0),
            end: Point::new(100.0, 100.0),
        },
        StyleProperties::default(),
        ItemDetail::Line,
    ))
    .unwrap();

    let mut modifier = ItemModifier::new();
    assert_eq!(modifier.press(&doc, Point::new(80.0, 20.0)), None);
    assert_eq!(modifier.press(&doc, Point::new(52.0, 50.0)), Some(Grab::Move));
    assert_eq!(modifier.selected(), Some(id));
}

#[test]
fn test_small_item_body_press_moves_it() {
    let (mut doc, ids) = document_with(&[(Rect::new(10.0, 10.0, 12.0, 12.0), ItemDetail::Rectangle)]);
    let mut modifier = ItemModifier::new();
    modifier.select(ids[0]);

    assert_eq!(modifier.press(&doc, Point::new(16.0, 16.0)), Some(Grab::Move));
    modifier.drag_to(&mut doc, Point::new(46.0, 46.0));
    assert_eq!(doc.items()[0].bounds(), Rect::new(40.0, 40.0, 12.0, 12.0));
    assert!(matches!(modifier.release(&doc), Some(Command::ModifyItem { .. })));
}

#[test]
fn test_vertical_line_midpoint_press_moves_it() {
    let mut doc = Document::new(Background::new(300.0, 300.0));
    let id = doc.allocate_id();
    doc.push(AnnotationItem::new(
        id,
        Shape::Segment {
            start: Point::new(50.0, 20.0),
            end: Point::new(50.0, 120.0),
        },
        StyleProperties::default(),
        ItemDetail::Line,
    ))
    .unwrap();
    let mut modifier = ItemModifier::new();
    modifier.select(id);

    assert_eq!(modifier.press(&doc, Point::new(50.0, 70.0)), Some(Grab::Move));
    modifier.drag_to(&mut doc, Point::new(90.0, 70.0));
    assert_eq!(
        doc.items()[0].shape,
        Shape::Segment {
            start: Point::new(90.0, 20.0),
            end: Point::new(90.0, 120.0),
        }
    );
    assert!(matches!(modifier.release(&doc), Some(Command::ModifyItem { .. })));
}

#[test]
fn test_vertical_line_end_drag_follows_pointer() {
    let mut doc = Document::new(Background::new(300.0, 300.0));
    let id = doc.allocate_id();
    doc.push(AnnotationItem::new(
        id,
        Shape::Segment {
            start: Point::new(50.0, 20.0),
            end: Point::new(50.0, 120.0),
        },
        StyleProperties::default(),
        ItemDetail::Line,
    ))
    .unwrap();
    let mut modifier = ItemModifier::new();
    modifier.select(id);

    assert_eq!(
        modifier.press(&doc, Point::new(50.0, 120.0)),
        Some(Grab::Handle(Handle::BottomRight))
    );
    modifier.drag_to(&mut doc, Point::new(50.0, 150.0));
    assert_eq!(doc.items()[0].bounds(), Rect::new(50.0, 20.0, 0.0, 130.0));
}
