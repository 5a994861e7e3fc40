pub mod capabilities;
pub mod tool;

pub use capabilities::{ClipboardWriter, Notice, NoticeLevel, Notifier};
pub use tool::{RenderHints, Tool, ToolCategory};
