pub mod clipboard;
pub mod color;
pub mod color_value;
pub mod error;
pub mod hex;
pub mod pipeline;
pub mod saved;
pub mod session;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use color_value::{ColorKind, ColorValue, Lab, Rgb};
pub use error::{ColorError, MalformedInput};
pub use pipeline::{AdjustmentParams, Pipeline, Stage};
pub use saved::{SavedColor, SavedColorId, SavedColors};
pub use session::AdjustableColorSession;
