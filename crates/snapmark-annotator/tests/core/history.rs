use snapmark_annotator::{
    AnnotationItem, Background, Command, Document, ItemDetail, Shape, UndoStack,
};
use snapmark_core::{Rect, StyleProperties};

fn document() -> Document {
    Document::new(Background::new(300.0, 200.0))
}

fn rectangle(doc: &mut Document, rect: Rect) -> AnnotationItem {
    let id = doc.allocate_id();
    AnnotationItem::new(
        id,
        Shape::frame(&rect),
        StyleProperties::default(),
        ItemDetail::Rectangle,
    )
}

fn add(doc: &mut Document, rect: Rect) -> Command {
    let item = rectangle(doc, rect);
    Command::AddItem {
        item,
        index: doc.len(),
    }
}

#[test]
fn test_adds_then_undos_restore_empty_document() {
    let mut doc = document();
    let mut stack = UndoStack::new();
    for i in 0..5 {
        let cmd = add(&mut doc, Rect::new(i as f64 * 10.0, 0.0, 5.0, 5.0));
        stack.push(cmd, &mut doc);
    }
    assert_eq!(doc.len(), 5);
    for _ in 0..5 {
        assert!(stack.undo(&mut doc));
    }
    assert!(doc.is_empty());
    assert!(!stack.can_undo());
}

#[test]
fn test_modify_round_trip_is_exact() {
    let mut doc = document();
    let mut stack = UndoStack::new();
    let cmd = add(&mut doc, Rect::new(10.0, 10.0, 40.0, 30.0));
    stack.push(cmd, &mut doc);

    let before = doc.items()[0].clone();
    let mut after = before.translated(3.5, -2.25);
    after.style.width = 9;
    stack.push(
        Command::ModifyItem {
            before: before.clone(),
            after: after.clone(),
        },
        &mut doc,
    );

    for _ in 0..3 {
        stack.undo(&mut doc);
        assert_eq!(doc.items()[0], before);
        stack.redo(&mut doc);
        assert_eq!(doc.items()[0], after);
    }
}

#[test]
fn test_push_after_undo_discards_redo() {
    let mut doc = document();
    let mut stack = UndoStack::new();
    let a = add(&mut doc, Rect::new(0.0, 0.0, 5.0, 5.0));
    stack.push(a, &mut doc);
    let b = add(&mut doc, Rect::new(10.0, 0.0, 5.0, 5.0));
    stack.push(b, &mut doc);

    stack.undo(&mut doc);
    stack.undo(&mut doc);
    assert_eq!(stack.cursor(), 0);
    assert!(stack.can_redo());

    let c = add(&mut doc, Rect::new(20.0, 0.0, 5.0, 5.0));
    stack.push(c, &mut doc);
    assert!(!stack.can_redo());
    assert_eq!(stack.len(), 1);
    assert!(!stack.redo(&mut doc));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_remove_restores_original_position() {
    let mut doc = document();
    let mut stack = UndoStack::new();
    for i in 0..3 {
        let cmd = add(&mut doc, Rect::new(i as f64 * 10.0, 0.0, 5.0, 5.0));
        stack.push(cmd, &mut doc);
    }
    let middle = doc.items()[1].clone();
    stack.push(
        Command::RemoveItem {
            item: middle.clone(),
            index: 1,
        },
        &mut doc,
    );
    assert_eq!(doc.len(), 2);
    stack.undo(&mut doc);
    assert_eq!(doc.index_of(middle.id), Some(1));
}

#[test]
fn test_reorder_round_trip() {
    let mut doc = document();
    let mut stack = UndoStack::new();
    for i in 0..3 {
        let cmd = add(&mut doc, Rect::new(i as f64 * 10.0, 0.0, 5.0, 5.0));
        stack.push(cmd, &mut doc);
    }
    let first = doc.items()[0].id;
    stack.push(
        Command::Reorder {
            id: first,
            from: 0,
            to: 2,
        },
        &mut doc,
    );
    assert_eq!(doc.index_of(first), Some(2));
    stack.undo(&mut doc);
    assert_eq!(doc.index_of(first), Some(0));
}

#[test]
fn test_limit_keeps_cursor_consistent() {
    let mut doc = document();
    let mut stack = UndoStack::with_limit(3);
    for i in 0..6 {
        let cmd = add(&mut doc, Rect::new(i as f64, 0.0, 5.0, 5.0));
        stack.push(cmd, &mut doc);
    }
    assert_eq!(stack.len(), 3);
    let mut undone = 0;
    while stack.undo(&mut doc) {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(doc.len(), 3);
}
