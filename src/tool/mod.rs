pub mod manager;
mod trait_def;
pub mod types;

pub use manager::ToolManager;
pub use trait_def::{CursorHint, Modifiers, PointerInput, Tool, ToolContext};
pub use types::{ToolKind, ToolType};

// Re-export specific tool implementations
pub use types::eraser::EraserTool;
pub use types::hand::HandTool;
pub use types::pen::PenTool;
pub use types::select::SelectTool;
pub use types::zoom::ZoomTool;
