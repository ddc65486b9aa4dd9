use kidsdraw::config::MAX_LAYERS;
use kidsdraw::editor::Editor;
use kidsdraw::layer_manager::ShapePatch;
use kidsdraw::project::{CanvasFormat, Project};
use kidsdraw::shape::{Fill, ShapeType};
use kidsdraw::storage::ProjectStore;

fn test_editor() -> Editor {
    Editor::new(Project::new("Nina", "Mon dessin", CanvasFormat::InstagramSquare))
}

fn temp_store(tag: &str) -> ProjectStore {
    let path = std::env::temp_dir().join(format!(
        "kidsdraw-editor-{tag}-{}.json",
        uuid::Uuid::new_v4()
    ));
    ProjectStore::new(path)
}

fn shape_count(editor: &Editor) -> usize {
    editor
        .layers()
        .layers()
        .iter()
        .map(|l| l.shapes.len())
        .sum()
}

#[test]
fn a_fresh_session_has_one_layer_and_no_undo() {
    let editor = test_editor();

    assert_eq!(editor.layers().layers().len(), 1);
    assert!(!editor.history().can_undo());
    assert_eq!(editor.project().owner_name, "Nina");
}

#[test]
fn shape_mutations_snapshot_for_undo_redo() {
    let mut editor = test_editor();

    let id = editor.add_shape(ShapeType::Circle, 100.0, 100.0, 50.0).unwrap();
    assert_eq!(shape_count(&editor), 1);

    assert!(editor.undo());
    assert_eq!(shape_count(&editor), 0);
    assert!(editor.redo());
    assert_eq!(shape_count(&editor), 1);

    assert!(editor.update_shape(
        id,
        ShapePatch {
            fill: Some(Fill::None),
            ..ShapePatch::default()
        },
    ));
    assert!(editor.remove_shape(id));
    assert_eq!(shape_count(&editor), 0);

    // update + remove were two more snapshots.
    assert!(editor.undo());
    assert_eq!(shape_count(&editor), 1);
}

#[test]
fn add_shape_reports_a_locked_active_layer() {
    let mut editor = test_editor();
    let layer = editor.layers().active_layer().unwrap().id;
    editor.toggle_layer_lock(layer).unwrap();

    assert!(editor.add_shape(ShapeType::Star, 50.0, 50.0, 40.0).is_none());
    assert_eq!(shape_count(&editor), 0);
}

#[test]
fn added_shapes_wear_the_session_fill() {
    let mut editor = test_editor();
    let id = editor.add_shape(ShapeType::Heart, 80.0, 80.0, 60.0).unwrap();

    let shape = editor.layers().shape(id).unwrap();
    assert_eq!(shape.fill, Fill::solid("#FF6B6B"));
    assert_eq!(shape.shape_type, ShapeType::Heart);
}

#[test]
fn layer_operations_are_undoable() {
    let mut editor = test_editor();

    editor.create_layer(Some("Décor")).unwrap();
    assert_eq!(editor.layers().layers().len(), 2);

    assert!(editor.undo());
    assert_eq!(editor.layers().layers().len(), 1);
    assert!(editor.redo());
    assert_eq!(editor.layers().layers().len(), 2);
}

#[test]
fn layer_capacity_surfaces_through_the_session() {
    let mut editor = test_editor();
    for _ in 0..MAX_LAYERS - 1 {
        editor.create_layer(None).unwrap();
    }

    assert!(editor.create_layer(None).is_err());
    assert_eq!(editor.layers().layers().len(), MAX_LAYERS);
}

#[test]
fn save_and_reload_roundtrips_the_document() {
    let store = temp_store("roundtrip");
    let mut editor = test_editor();
    editor.add_shape(ShapeType::Polygon, 64.0, 64.0, 48.0).unwrap();
    editor.create_layer(Some("Fond")).unwrap();
    editor.add_shape(ShapeType::Line, 10.0, 10.0, 30.0).unwrap();

    editor.save_to(&store).unwrap();

    let loaded = store.load_project(editor.project().id).unwrap();
    assert_eq!(loaded.layers, editor.layers().export());
    assert_eq!(loaded.project_name, "Mon dessin");
    assert!(loaded.last_modified >= loaded.created_at);

    // A second editor resumes exactly where the first left off.
    let resumed = Editor::new(loaded);
    assert_eq!(shape_count(&resumed), 2);
    assert_eq!(resumed.layers().layers().len(), 2);

    store.clear().unwrap();
}

#[test]
fn load_project_replaces_the_document_and_history() {
    let mut editor = test_editor();
    editor.add_shape(ShapeType::Square, 30.0, 30.0, 20.0).unwrap();

    let other = Project::new("Théo", "Autre dessin", CanvasFormat::Custom);
    editor.load_project(other);

    assert_eq!(editor.project().project_name, "Autre dessin");
    assert_eq!(shape_count(&editor), 0);
    assert_eq!(editor.layers().layers().len(), 1);
    // Old document's snapshots are gone.
    assert!(!editor.history().can_undo());
    // Custom format without explicit dimensions uses the stock size.
    assert_eq!(editor.project().canvas_size(), (800, 600));
}

#[test]
fn autosave_does_not_fire_before_its_interval() {
    let store = temp_store("autosave");
    let mut editor = test_editor();

    assert!(!editor.maybe_autosave(&store).unwrap());
    assert!(store.projects().unwrap().is_empty());
}
