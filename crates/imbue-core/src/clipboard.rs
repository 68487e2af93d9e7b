use tracing::debug;

use crate::color_value::{ColorValue, Rgb};

/// Text clipboard provided by the host platform.
pub trait Clipboard {
    fn write(&mut self, text: &str);
    fn read(&self) -> Option<String>;
}

/// Process-local clipboard, for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) {
        self.contents = Some(text.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.contents.clone()
    }
}

impl ColorValue {
    /// Write the sRGB hex string of this color. Returns `false`, leaving the
    /// clipboard alone, when there is no sRGB projection.
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) -> bool {
        match self.to_srgb() {
            Ok(rgb) => {
                let hex = rgb.to_hex();
                debug!(%hex, "copied color");
                clipboard.write(&hex);
                true
            }
            Err(err) => {
                debug!(%err, "nothing copied");
                false
            }
        }
    }

    /// Read a hex string from the clipboard as an sRGB color.
    pub fn from_clipboard(clipboard: &dyn Clipboard) -> Option<ColorValue> {
        let text = clipboard.read()?;
        match Rgb::from_hex(&text) {
            Ok(rgb) => Some(ColorValue::Srgb(rgb)),
            Err(err) => {
                debug!(%err, "clipboard does not hold a color");
                None
            }
        }
    }
}
