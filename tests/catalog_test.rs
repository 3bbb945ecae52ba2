use stylus_playground::catalog::{self, NOT_FOUND};
use stylus_playground::tui::App;

#[test]
fn test_every_listed_example_has_text() {
    for name in catalog::names() {
        let text = catalog::source_for(name);
        assert!(!text.trim().is_empty(), "{name} is empty");
        assert_ne!(text, NOT_FOUND, "{name} fell back to the placeholder");
    }
}

#[test]
fn test_unknown_key_maps_to_placeholder() {
    assert_eq!(catalog::source_for("Loops"), NOT_FOUND);
    assert_eq!(catalog::lookup("loops.rs"), "// Example not found");
}

#[test]
fn test_switching_examples_replaces_buffer_exactly() {
    let mut app = App::new("Stylus Constants");
    assert_eq!(app.editor.text(), catalog::source_for("Stylus Constants"));

    for (index, example) in catalog::all().iter().enumerate() {
        app.editor.insert_str("leftover edit\n");
        app.select_example(index);
        assert_eq!(app.editor.text(), example.source());
    }
}

#[test]
fn test_list_json_shape() -> anyhow::Result<()> {
    let value = serde_json::to_value(catalog::all())?;
    let first = &value[0];
    assert_eq!(first["name"], "Hello world!");
    assert_eq!(first["file"], "hello.rs");
    assert_eq!(first["kind"], "plain");
    assert!(first.get("explanation").is_none());
    assert_eq!(value[2]["kind"], "contract");
    Ok(())
}
