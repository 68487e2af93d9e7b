use std::sync::LazyLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::color_value::{ColorValue, Lab, Rgb};
use crate::error::ColorError;
use crate::pipeline::{AdjustmentParams, Pipeline, Stage};

static PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::new);

/// One input color plus the adjustments applied to it.
///
/// The owner mutates fields directly. The output color is not stored: every
/// call to [`output_color`](Self::output_color) reruns the pipeline against
/// the current fields, so it can never be stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustableColorSession {
    #[serde(default)]
    pub input_color: ColorValue,
    #[serde(default)]
    pub params: AdjustmentParams,
}

impl AdjustableColorSession {
    pub fn new(input_color: ColorValue) -> Self {
        Self {
            input_color,
            params: AdjustmentParams::default(),
        }
    }

    /// Load a session from its JSON form. Missing keys take their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid session document")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize session")
    }

    pub fn output_color(&self) -> Result<ColorValue, ColorError> {
        PIPELINE.process(&self.input_color, &self.params)
    }

    /// The output after stages up to and including `last`.
    pub fn output_color_up_to(&self, last: Stage) -> Result<ColorValue, ColorError> {
        PIPELINE.process_up_to(&self.input_color, &self.params, last)
    }

    /// Replace the input with Lab coordinates, discarding the old value.
    pub fn set_lab(&mut self, lab: Lab) {
        self.input_color.replace_with(lab);
    }

    /// Replace the input with sRGB coordinates, discarding the old value.
    pub fn set_srgb(&mut self, rgb: Rgb) {
        self.input_color.replace_with(rgb);
    }

    pub fn reset_adjustments(&mut self) {
        self.params = AdjustmentParams::default();
    }

    /// Copy the output color's hex string. Returns whether anything was
    /// written.
    pub fn copy_output(&self, clipboard: &mut dyn Clipboard) -> bool {
        match self.output_color() {
            Ok(color) => color.copy_to(clipboard),
            Err(err) => {
                debug!(%err, "output unavailable, nothing copied");
                false
            }
        }
    }

    /// Replace the input color with a hex color from the clipboard. Leaves
    /// the session untouched if the clipboard holds anything else.
    pub fn paste_input(&mut self, clipboard: &dyn Clipboard) -> bool {
        match ColorValue::from_clipboard(clipboard) {
            Some(color) => {
                self.input_color = color;
                true
            }
            None => false,
        }
    }
}
