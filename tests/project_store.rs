use kidsdraw::config::MAX_PROJECTS;
use kidsdraw::layer::Layer;
use kidsdraw::project::{CanvasFormat, Project};
use kidsdraw::shape::geometry::create_shape;
use kidsdraw::shape::{
    Fill, Gradient, GradientKind, GradientStop, Shadow, ShapeType, StrokeStyle,
};
use kidsdraw::storage::{sort_projects, ProjectStore, SortOrder, StorageError};

struct TempStore {
    store: ProjectStore,
}

impl TempStore {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "kidsdraw-store-{tag}-{}.json",
            uuid::Uuid::new_v4()
        ));
        Self {
            store: ProjectStore::new(path),
        }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = self.store.clear();
    }
}

/// A project exercising every persisted field: gradient fill, dashed
/// stroke, shadow, Bézier handles, custom canvas size.
fn fancy_project() -> Project {
    let mut heart = create_shape(ShapeType::Heart, 60.0, 60.0, 80.0);
    heart.fill = Fill::Gradient {
        gradient: Gradient {
            kind: GradientKind::Radial,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: "#FF9FF3".to_string(),
                },
                GradientStop {
                    offset: 1.0,
                    color: "#FF6B6B".to_string(),
                },
            ],
            x1: Some(60.0),
            y1: Some(60.0),
            x2: None,
            y2: None,
        },
    };
    heart.shadow = Some(Shadow {
        offset_x: 2.0,
        offset_y: 3.0,
        blur: 4.0,
        color: "#00000080".to_string(),
    });

    let mut line = create_shape(ShapeType::Line, 10.0, 10.0, 50.0);
    line.stroke = StrokeStyle {
        width: 3.5,
        color: "#45B7D1".to_string(),
        dash_array: Some("4 2".to_string()),
        ..StrokeStyle::default()
    };

    let mut layer = Layer::new("Calque 1", 0);
    layer.opacity = 80;
    layer.shapes = vec![heart, line];

    let mut project = Project::new("Nina", "Cœur arc-en-ciel", CanvasFormat::Custom);
    project.custom_width = Some(1024);
    project.custom_height = Some(768);
    project.layers = vec![layer];
    project
}

#[test]
fn a_missing_store_file_reads_as_empty() {
    let temp = TempStore::new("empty");
    assert!(temp.store.projects().unwrap().is_empty());
}

#[test]
fn save_and_load_roundtrip_is_lossless() {
    let temp = TempStore::new("roundtrip");
    let project = fancy_project();

    let id = temp.store.save_project(&project).unwrap();
    let loaded = temp.store.load_project(id).unwrap();

    assert_eq!(loaded, project);
    assert_eq!(loaded.canvas_size(), (1024, 768));
}

#[test]
fn saving_an_existing_id_updates_in_place() {
    let temp = TempStore::new("update");
    let mut project = fancy_project();
    temp.store.save_project(&project).unwrap();

    project.project_name = "Renommé".to_string();
    temp.store.save_project(&project).unwrap();

    let projects = temp.store.projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project_name, "Renommé");
}

#[test]
fn delete_removes_only_the_matching_project() {
    let temp = TempStore::new("delete");
    let kept = fancy_project();
    let gone = Project::new("Théo", "Brouillon", CanvasFormat::A4Portrait);
    temp.store.save_project(&kept).unwrap();
    temp.store.save_project(&gone).unwrap();

    assert!(temp.store.delete_project(gone.id).unwrap());
    assert!(!temp.store.delete_project(gone.id).unwrap());

    let remaining = temp.store.projects().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[test]
fn loading_an_unknown_project_surfaces_not_found() {
    let temp = TempStore::new("missing");
    let unknown = Project::new("", "", CanvasFormat::A4Portrait).id;

    let err = temp.store.load_project(unknown).unwrap_err();
    assert!(matches!(err, StorageError::NotFound(id) if id == unknown));
}

#[test]
fn corrupt_store_contents_surface_as_an_error() {
    let temp = TempStore::new("corrupt");
    std::fs::write(temp.store.path(), "ceci n'est pas du JSON").unwrap();

    let err = temp.store.projects().unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[test]
fn search_matches_project_and_owner_names_case_insensitively() {
    let temp = TempStore::new("search");
    temp.store.save_project(&fancy_project()).unwrap();
    temp.store
        .save_project(&Project::new("Théo", "Fusée", CanvasFormat::A4Portrait))
        .unwrap();

    assert_eq!(temp.store.search("cŒur").unwrap().len(), 1);
    assert_eq!(temp.store.search("théo").unwrap().len(), 1);
    assert_eq!(temp.store.search("  ").unwrap().len(), 2);
    assert!(temp.store.search("dragon").unwrap().is_empty());
}

#[test]
fn sort_orders_cover_recency_and_name() {
    let mut a = Project::new("", "banane", CanvasFormat::A4Portrait);
    let mut b = Project::new("", "Abricot", CanvasFormat::A4Portrait);
    let mut c = Project::new("", "cerise", CanvasFormat::A4Portrait);
    a.last_modified = 300;
    b.last_modified = 100;
    c.last_modified = 200;

    let recent = sort_projects(vec![a.clone(), b.clone(), c.clone()], SortOrder::Recent);
    assert_eq!(recent[0].id, a.id);
    assert_eq!(recent[2].id, b.id);

    let oldest = sort_projects(vec![a.clone(), b.clone(), c.clone()], SortOrder::Oldest);
    assert_eq!(oldest[0].id, b.id);

    let by_name = sort_projects(vec![a.clone(), b.clone(), c.clone()], SortOrder::Name);
    let names: Vec<_> = by_name.iter().map(|p| p.project_name.as_str()).collect();
    assert_eq!(names, vec!["Abricot", "banane", "cerise"]);
}

#[test]
fn a_full_store_evicts_the_least_recently_modified_project() {
    let temp = TempStore::new("eviction");

    let mut oldest_id = None;
    for i in 0..MAX_PROJECTS {
        let mut project = Project::new("Nina", format!("Dessin {i}"), CanvasFormat::A4Portrait);
        project.last_modified = 1_000 + i as u64;
        if i == 0 {
            oldest_id = Some(project.id);
        }
        temp.store.save_project(&project).unwrap();
    }
    assert_eq!(temp.store.projects().unwrap().len(), MAX_PROJECTS);

    let mut newcomer = Project::new("Nina", "Dessin de trop", CanvasFormat::A4Portrait);
    newcomer.last_modified = 9_999;
    temp.store.save_project(&newcomer).unwrap();

    let projects = temp.store.projects().unwrap();
    assert_eq!(projects.len(), MAX_PROJECTS);
    assert!(projects.iter().all(|p| Some(p.id) != oldest_id));
    assert!(projects.iter().any(|p| p.id == newcomer.id));
}

#[test]
fn clear_empties_the_library() {
    let temp = TempStore::new("clear");
    temp.store.save_project(&fancy_project()).unwrap();

    temp.store.clear().unwrap();
    assert!(temp.store.projects().unwrap().is_empty());
}
