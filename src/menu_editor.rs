pub mod editor_events;
pub mod editor_render;
mod editor_state;

pub use editor_state::{EditorFocus, EditorMode, MenuEditorState};
