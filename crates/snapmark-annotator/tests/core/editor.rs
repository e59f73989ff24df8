use std::cell::RefCell;
use std::rc::Rc;

use snapmark_annotator::{AnnotationEditor, Background, EditorMode, ItemKind, Shape};
use snapmark_core::{
    EditorEvent, EventBusConfig, EventCategory, EventFilter, ItemId, Key, KeyEvent, Modifiers, Point,
    PointerEvent, Rect, Tool,
};

fn editor() -> AnnotationEditor {
    AnnotationEditor::new(Background::new(200.0, 150.0))
}

fn draw(editor: &mut AnnotationEditor, from: (f64, f64), to: (f64, f64)) {
    editor.pointer_press(PointerEvent::at(from.0, from.1));
    editor.pointer_move(PointerEvent::at(
        (from.0 + to.0) / 2.0,
        (from.1 + to.1) / 2.0,
    ));
    editor.pointer_release(PointerEvent::at(to.0, to.1));
}

fn click(editor: &mut AnnotationEditor, at: (f64, f64)) {
    editor.pointer_press(PointerEvent::at(at.0, at.1));
    editor.pointer_release(PointerEvent::at(at.0, at.1));
}

#[test]
fn test_rectangle_create_undo_redo() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));

    assert_eq!(editor.items().len(), 1);
    let bounds = editor.items()[0].bounds();
    assert_eq!(bounds, Rect::new(10.0, 10.0, 40.0, 30.0));

    assert!(editor.undo());
    assert!(editor.items().is_empty());

    assert!(editor.redo());
    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.items()[0].bounds(), bounds);
}

#[test]
fn test_corner_handle_drag_records_one_command() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));
    let id = editor.items()[0].id;

    editor.set_tool(Tool::Select);
    assert!(editor.select(id));
    editor.pointer_press(PointerEvent::at(10.0, 10.0));
    assert_eq!(editor.mode(), EditorMode::Editing);
    for p in [(8.0, 8.0), (5.0, 4.0), (2.0, 1.0), (0.0, 0.0)] {
        editor.pointer_move(PointerEvent::at(p.0, p.1));
    }
    editor.pointer_release(PointerEvent::at(0.0, 0.0));

    let bounds = editor.items()[0].bounds();
    assert_eq!(bounds.top_left(), Point::new(0.0, 0.0));
    assert_eq!(bounds.bottom_right(), Point::new(50.0, 40.0));
    assert_eq!(editor.history().len(), 2);
    assert_eq!(editor.history().undo_name(), Some("Modify Item"));

    editor.undo();
    assert_eq!(editor.items()[0].bounds(), Rect::new(10.0, 10.0, 40.0, 30.0));
}

#[test]
fn test_escape_mid_creation_adds_nothing() {
    let mut editor = editor();
    editor.set_tool(Tool::Ellipse);
    editor.pointer_press(PointerEvent::at(10.0, 10.0));
    editor.pointer_move(PointerEvent::at(60.0, 60.0));
    assert!(editor.in_progress_item().is_some());

    assert!(editor.key_press(KeyEvent::plain(Key::Escape)));
    editor.pointer_release(PointerEvent::at(60.0, 60.0));

    assert!(editor.items().is_empty());
    assert_eq!(editor.history().len(), 0);
    assert_eq!(editor.mode(), EditorMode::Idle);
}

#[test]
fn test_escape_mid_drag_restores_item() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));
    editor.set_tool(Tool::Select);

    editor.pointer_press(PointerEvent::at(30.0, 25.0));
    editor.pointer_move(PointerEvent::at(90.0, 95.0));
    assert_ne!(editor.items()[0].bounds().x, 10.0);

    editor.key_press(KeyEvent::plain(Key::Escape));
    assert_eq!(editor.items()[0].bounds(), Rect::new(10.0, 10.0, 40.0, 30.0));
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_zero_extent_item_is_discarded() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    click(&mut editor, (20.0, 20.0));
    draw(&mut editor, (20.0, 20.0), (80.0, 20.0));
    assert!(editor.items().is_empty());
    assert!(!editor.can_undo());

    editor.set_tool(Tool::Line);
    draw(&mut editor, (20.0, 20.0), (80.0, 20.0));
    assert_eq!(editor.items().len(), 1);
}

#[test]
fn test_undo_ignored_mid_gesture() {
    let mut editor = editor();
    editor.set_tool(Tool::Arrow);
    draw(&mut editor, (0.0, 0.0), (40.0, 40.0));

    editor.pointer_press(PointerEvent::at(50.0, 50.0));
    let undo = KeyEvent::new(Key::Char('z'), Modifiers::CTRL);
    assert!(!editor.key_press(undo));
    assert_eq!(editor.items().len(), 1);

    editor.pointer_release(PointerEvent::at(90.0, 60.0));
    assert_eq!(editor.items().len(), 2);
    assert!(editor.key_press(undo));
    assert_eq!(editor.items().len(), 1);

    let redo = KeyEvent::new(Key::Char('y'), Modifiers::CTRL);
    assert!(editor.key_press(redo));
    assert_eq!(editor.items().len(), 2);
}

#[test]
fn test_out_of_order_events_are_ignored() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    editor.pointer_move(PointerEvent::at(10.0, 10.0));
    editor.pointer_release(PointerEvent::at(30.0, 30.0));
    assert!(editor.items().is_empty());
    assert_eq!(editor.mode(), EditorMode::Idle);
}

#[test]
fn test_highlighter_appends_points() {
    let mut editor = editor();
    editor.set_tool(Tool::Highlighter);
    editor.pointer_press(PointerEvent::at(0.0, 0.0));
    editor.pointer_move(PointerEvent::at(5.0, 1.0));
    editor.pointer_move(PointerEvent::at(10.0, 3.0));
    editor.pointer_release(PointerEvent::at(15.0, 2.0));

    match &editor.items()[0].shape {
        Shape::Stroke { points } => assert_eq!(points.len(), 4),
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn test_badges_count_up_and_reuse_after_undo() {
    let mut editor = editor();
    editor.set_tool(Tool::NumberBadge);
    click(&mut editor, (40.0, 40.0));
    click(&mut editor, (120.0, 40.0));
    let numbers: Vec<_> = editor
        .items()
        .iter()
        .filter_map(|item| item.badge_number())
        .collect();
    assert_eq!(numbers, vec![1, 2]);

    editor.undo();
    click(&mut editor, (120.0, 90.0));
    assert_eq!(editor.items()[1].badge_number(), Some(2));
}

#[test]
fn test_first_badge_number_is_configurable() {
    let mut editor = editor();
    editor.set_first_badge_number(10);
    editor.set_tool(Tool::NumberBadge);
    click(&mut editor, (40.0, 40.0));
    assert_eq!(editor.items()[0].badge_number(), Some(10));
}

#[test]
fn test_stamp_follows_pointer_while_creating() {
    let mut editor = editor();
    editor.set_tool(Tool::Sticker);
    editor.pointer_press(PointerEvent::at(40.0, 40.0));
    editor.pointer_move(PointerEvent::at(70.0, 60.0));
    editor.pointer_release(PointerEvent::at(100.0, 80.0));

    let item = &editor.items()[0];
    assert_eq!(item.kind(), ItemKind::Sticker);
    assert_eq!(item.bounds(), Rect::new(68.0, 48.0, 64.0, 64.0));
}

#[test]
fn test_delete_key_and_undo_restore_position() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (30.0, 30.0));
    draw(&mut editor, (40.0, 10.0), (60.0, 30.0));
    let first = editor.items()[0].id;

    editor.set_tool(Tool::Select);
    click(&mut editor, (20.0, 20.0));
    assert_eq!(editor.selection(), Some(first));

    assert!(editor.key_press(KeyEvent::plain(Key::Delete)));
    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.selection(), None);

    editor.undo();
    assert_eq!(editor.document().index_of(first), Some(0));
}

#[test]
fn test_arrow_keys_nudge_selection() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (30.0, 30.0));
    let id = editor.items()[0].id;
    editor.set_tool(Tool::Select);
    editor.select(id);

    editor.key_press(KeyEvent::plain(Key::Right));
    editor.key_press(KeyEvent::new(Key::Down, Modifiers::SHIFT));
    assert_eq!(editor.items()[0].bounds().top_left(), Point::new(11.0, 20.0));
    assert_eq!(editor.history().len(), 3);
}

#[test]
fn test_tool_shortcuts() {
    let mut editor = editor();
    assert!(editor.key_press(KeyEvent::plain(Key::Char('r'))));
    assert_eq!(editor.tool(), Tool::Rectangle);
    assert!(!editor.key_press(KeyEvent::new(Key::Char('e'), Modifiers::CTRL)));
    assert_eq!(editor.tool(), Tool::Rectangle);
    assert!(!editor.key_release(KeyEvent::plain(Key::Char('e'))));
    assert!(!editor.key_press(KeyEvent::plain(Key::Char('q'))));
}

#[test]
fn test_z_order_changes_are_undoable() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    for x in [10.0, 20.0, 30.0] {
        draw(&mut editor, (x, 10.0), (x + 50.0, 60.0));
    }
    let bottom = editor.items()[0].id;
    editor.set_tool(Tool::Select);
    editor.select(bottom);

    assert!(editor.bring_to_front());
    assert_eq!(editor.document().index_of(bottom), Some(2));
    assert!(!editor.bring_forward());
    assert!(editor.send_backward());
    assert_eq!(editor.document().index_of(bottom), Some(1));

    editor.undo();
    editor.undo();
    assert_eq!(editor.document().index_of(bottom), Some(0));
    assert!(!editor.send_to_back());
}

#[test]
fn test_topmost_item_wins_press() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (60.0, 60.0));
    draw(&mut editor, (30.0, 30.0), (90.0, 90.0));
    let top = editor.items()[1].id;

    editor.set_tool(Tool::Select);
    click(&mut editor, (40.0, 40.0));
    assert_eq!(editor.selection(), Some(top));

    click(&mut editor, (150.0, 140.0));
    assert_eq!(editor.selection(), None);
}

#[test]
fn test_crop_shifts_items_and_undoes() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));

    assert!(editor.apply_crop(Rect::new(5.0, 5.0, 100.0, 300.0)));
    let background = editor.document().background();
    assert_eq!((background.width, background.height), (100.0, 145.0));
    assert_eq!(background.offset, Point::new(5.0, 5.0));
    assert_eq!(editor.items()[0].bounds(), Rect::new(5.0, 5.0, 40.0, 30.0));

    editor.undo();
    assert_eq!(editor.document().background().width, 200.0);
    assert_eq!(editor.items()[0].bounds(), Rect::new(10.0, 10.0, 40.0, 30.0));

    assert!(!editor.apply_crop(Rect::new(0.0, 0.0, 200.0, 150.0)));
    assert!(!editor.apply_crop(Rect::new(500.0, 500.0, 10.0, 10.0)));
}

#[test]
fn test_insert_pixmap_is_undoable() {
    let mut editor = editor();
    let id = editor
        .insert_pixmap(Rect::new(60.0, 60.0, -40.0, -20.0), "clipboard:1")
        .unwrap();
    let item = editor.document().get(id).unwrap();
    assert_eq!(item.kind(), ItemKind::Pixmap);
    assert_eq!(item.bounds(), Rect::new(20.0, 40.0, 40.0, 20.0));

    editor.undo();
    assert!(editor.items().is_empty());
    assert!(editor
        .insert_pixmap(Rect::new(0.0, 0.0, 0.0, 10.0), "empty")
        .is_none());
}

#[test]
fn test_text_content_edit() {
    let mut editor = editor();
    editor.set_tool(Tool::Text);
    draw(&mut editor, (10.0, 10.0), (120.0, 40.0));
    let id = editor.items()[0].id;

    assert!(editor.set_item_text(id, "Click here"));
    assert_eq!(editor.items()[0].text(), Some("Click here"));
    assert!(!editor.set_item_text(id, "Click here"));

    editor.undo();
    assert_eq!(editor.items()[0].text(), Some(""));
}

#[test]
fn test_stale_ids_are_noops() {
    let mut editor = editor();
    assert!(!editor.edit_item(ItemId(999)));
    assert!(!editor.set_item_text(ItemId(999), "x"));
    assert!(!editor.select(ItemId(999)));
    assert!(!editor.delete_selected());
    assert!(!editor.undo());
    assert!(!editor.redo());
}

#[test]
fn test_history_limit() {
    let mut editor = AnnotationEditor::new(Background::new(200.0, 150.0)).with_history_limit(2);
    editor.set_tool(Tool::Line);
    for y in [10.0, 20.0, 30.0] {
        draw(&mut editor, (0.0, y), (50.0, y));
    }
    while editor.undo() {}
    assert_eq!(editor.items().len(), 1);
}

#[test]
fn test_load_image_resets_document() {
    let mut editor = editor();
    editor.set_tool(Tool::Line);
    draw(&mut editor, (0.0, 10.0), (50.0, 10.0));
    editor.load_image(Background::new(800.0, 600.0).with_source("shot.png"));
    assert!(editor.items().is_empty());
    assert!(!editor.can_undo());
    assert_eq!(
        editor.document().background().source.as_deref(),
        Some("shot.png")
    );
}

#[test]
fn test_events_reach_subscribers() {
    let mut editor = editor();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = editor.subscribe(
        EventFilter::Categories(vec![EventCategory::Tool, EventCategory::History]),
        move |event| sink.borrow_mut().push(event.clone()),
    );

    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));

    assert_eq!(
        *seen.borrow(),
        vec![
            EditorEvent::ToolChanged(Tool::Rectangle),
            EditorEvent::HistoryChanged {
                can_undo: true,
                can_redo: false
            },
        ]
    );

    assert!(editor.unsubscribe(sub));
    editor.undo();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_event_history_is_opt_in() {
    let mut plain = editor();
    plain.set_tool(Tool::Rectangle);
    assert!(plain.events().history().is_empty());

    let mut editor = editor().with_event_config(EventBusConfig {
        enable_history: true,
        max_history_size: 4,
    });
    editor.set_tool(Tool::Rectangle);
    assert_eq!(
        editor.events().history().first(),
        Some(&EditorEvent::ToolChanged(Tool::Rectangle))
    );

    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));
    let history = editor.events().history();
    assert!(history.len() <= 4);
    assert!(history.contains(&EditorEvent::HistoryChanged {
        can_undo: true,
        can_redo: false
    }));

    editor.clear_event_history();
    assert!(editor.events().history().is_empty());
}

#[test]
fn test_selection_events() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));
    let id = editor.items()[0].id;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    editor.subscribe(
        EventFilter::Categories(vec![EventCategory::Selection]),
        move |event| sink.borrow_mut().push(event.clone()),
    );

    editor.set_tool(Tool::Select);
    click(&mut editor, (30.0, 25.0));
    editor.key_press(KeyEvent::plain(Key::Escape));

    assert_eq!(
        *seen.borrow(),
        vec![
            EditorEvent::SelectionChanged(Some(id)),
            EditorEvent::SelectionChanged(None),
        ]
    );
}

#[test]
fn test_scene_serializes() {
    let mut editor = editor();
    editor.set_tool(Tool::Rectangle);
    draw(&mut editor, (10.0, 10.0), (50.0, 40.0));
    let id = editor.items()[0].id;
    editor.edit_item(id);

    let scene = editor.scene();
    assert_eq!(scene.handles.map(|h| h.len()), Some(8));
    assert_eq!(scene.paint_order().count(), 1);

    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["tool"], "select");
    assert_eq!(json["mode"], "Idle");
}
