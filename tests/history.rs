use kidsdraw::config::MAX_HISTORY;
use kidsdraw::history::History;
use kidsdraw::layer_manager::LayerManager;
use kidsdraw::shape::geometry::create_shape;
use kidsdraw::shape::ShapeType;

fn add_shape(layers: &mut LayerManager) {
    layers.add_shape(create_shape(ShapeType::Circle, 50.0, 50.0, 20.0), None);
}

fn shape_count(layers: &LayerManager) -> usize {
    layers.layers().iter().map(|l| l.shapes.len()).sum()
}

#[test]
fn fresh_history_has_nothing_to_undo_or_redo() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    assert!(history.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.undo(&mut layers));
    assert!(!history.redo(&mut layers));
}

#[test]
fn n_saves_allow_exactly_n_minus_one_undos_and_redos() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    let n = 5;
    for _ in 0..n {
        add_shape(&mut layers);
        history.save(&layers);
    }

    for step in 0..n - 1 {
        assert!(history.undo(&mut layers), "undo {step} should succeed");
    }
    assert!(!history.undo(&mut layers), "undo past the oldest snapshot");

    for step in 0..n - 1 {
        assert!(history.redo(&mut layers), "redo {step} should succeed");
    }
    assert!(!history.redo(&mut layers), "redo past the newest snapshot");
}

#[test]
fn undo_and_redo_restore_layer_content() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    history.save(&layers); // baseline: no shapes
    add_shape(&mut layers);
    history.save(&layers);

    assert!(history.undo(&mut layers));
    assert_eq!(shape_count(&layers), 0);

    assert!(history.redo(&mut layers));
    assert_eq!(shape_count(&layers), 1);
}

#[test]
fn saving_after_an_undo_discards_the_redo_branch() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    history.save(&layers);
    add_shape(&mut layers);
    history.save(&layers);
    add_shape(&mut layers);
    history.save(&layers);

    assert!(history.undo(&mut layers));
    assert!(history.can_redo());

    add_shape(&mut layers);
    history.save(&layers);

    assert!(!history.can_redo());
    assert!(!history.redo(&mut layers));
}

#[test]
fn restored_snapshots_do_not_alias_the_live_document() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    history.save(&layers);
    add_shape(&mut layers);
    history.save(&layers);

    // Mutating the live document after a restore must not bleed into the
    // stored snapshot.
    history.undo(&mut layers);
    add_shape(&mut layers);
    add_shape(&mut layers);

    assert!(!history.undo(&mut layers)); // already at the oldest snapshot
    assert_eq!(shape_count(&layers), 2);

    history.redo(&mut layers);
    assert_eq!(shape_count(&layers), 1);
}

#[test]
fn the_window_slides_once_full() {
    let mut layers = LayerManager::new();
    let mut history = History::new();
    let layer_id = layers.active_layer().unwrap().id;

    let total = MAX_HISTORY + 10;
    for i in 0..total {
        layers.rename_layer(layer_id, &format!("L{i}"));
        history.save(&layers);
    }

    assert_eq!(history.len(), MAX_HISTORY);

    // Oldest snapshots were evicted first (FIFO).
    let oldest = history.oldest().unwrap();
    assert_eq!(oldest.layers[0].name, format!("L{}", total - MAX_HISTORY));

    // The cursor still sits on the newest save: a full window of undos.
    for _ in 0..MAX_HISTORY - 1 {
        assert!(history.undo(&mut layers));
    }
    assert!(!history.undo(&mut layers));
    assert_eq!(layers.layers()[0].name, format!("L{}", total - MAX_HISTORY));
}

#[test]
fn clear_empties_the_history() {
    let mut layers = LayerManager::new();
    let mut history = History::new();

    add_shape(&mut layers);
    history.save(&layers);
    history.save(&layers);
    history.clear();

    assert!(history.is_empty());
    assert!(!history.can_undo());
    assert!(!history.undo(&mut layers));
}
