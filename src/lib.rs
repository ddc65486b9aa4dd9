#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod layer;
pub mod layer_manager;
pub mod project;
pub mod renderer;
pub mod shape;
pub mod storage;
pub mod tool;
pub mod util;

pub use editor::{DrawingStyle, Editor};
pub use error::EditorError;
pub use history::{History, Snapshot};
pub use layer::{Layer, LayerId};
pub use layer_manager::LayerManager;
pub use project::{CanvasFormat, Project, ProjectId};
pub use renderer::Renderer;
pub use shape::{Fill, PathPoint, Shape, ShapeId, ShapeType, StrokeStyle, Transform};
pub use storage::{ProjectStore, SortOrder, StorageError};
pub use tool::{CursorHint, PointerInput, Tool, ToolContext, ToolKind, ToolManager};
