//! Headless walkthrough of the editor.
//!
//! Parses embedded settings, scripts a short annotation session and prints
//! the resulting scene as JSON.

use snapmark::{
    init_logging, AnnotationEditor, AnnotatorSettings, Background, Key, KeyEvent, PointerEvent,
    Rect, Tool,
};
use tracing::info;

const DEMO_SETTINGS: &str = r##"
selected_tool = "rectangle"
first_badge_number = 1
history_limit = 50

[tools.rectangle]
color = "#1e90ff"
width = 4
"##;

fn drag(editor: &mut AnnotationEditor, from: (f64, f64), to: (f64, f64)) {
    editor.pointer_press(PointerEvent::at(from.0, from.1));
    editor.pointer_move(PointerEvent::at(
        (from.0 + to.0) / 2.0,
        (from.1 + to.1) / 2.0,
    ));
    editor.pointer_release(PointerEvent::at(to.0, to.1));
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let settings = AnnotatorSettings::from_toml_str(DEMO_SETTINGS)?;
    let history_limit = settings.history_limit;

    let background = Background::new(800.0, 600.0).with_source("screenshot.png");
    let mut editor =
        AnnotationEditor::with_style_source(background, settings).with_history_limit(history_limit);
    info!("Starting with the {} tool", editor.tool());

    drag(&mut editor, (100.0, 100.0), (300.0, 220.0));

    editor.set_tool(Tool::Arrow);
    drag(&mut editor, (500.0, 400.0), (320.0, 230.0));

    editor.set_tool(Tool::NumberBadge);
    for (x, y) in [(90.0, 90.0), (510.0, 410.0)] {
        editor.pointer_press(PointerEvent::at(x, y));
        editor.pointer_release(PointerEvent::at(x, y));
    }

    editor.set_tool(Tool::Select);
    drag(&mut editor, (200.0, 100.0), (220.0, 120.0));
    editor.key_press(KeyEvent::plain(Key::Escape));

    editor.apply_crop(Rect::new(50.0, 50.0, 600.0, 450.0));
    editor.undo();
    editor.redo();

    info!(
        "{} items, undo: {:?}",
        editor.items().len(),
        editor.history().undo_name()
    );
    println!("{}", serde_json::to_string_pretty(&editor.scene())?);

    Ok(())
}
