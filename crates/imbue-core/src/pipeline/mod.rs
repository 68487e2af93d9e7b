pub mod module;
pub mod modules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color_value::{ColorValue, Rgb};
use crate::error::ColorError;
use module::AdjustmentStage;

/// Adjustment amounts applied to an input color.
///
/// The three amounts are fractions in [0,1]; out-of-range values are
/// clamped when applied, and NaN counts as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    pub lighten: f64,
    pub darken: f64,
    pub desaturate: f64,
    pub invert: bool,
}

/// Position of a stage in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Lighten,
    Darken,
    Desaturate,
    Invert,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Lighten, Stage::Darken, Stage::Desaturate, Stage::Invert];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Lighten => "lighten",
            Stage::Darken => "darken",
            Stage::Desaturate => "desaturate",
            Stage::Invert => "invert",
        }
    }
}

/// Fixed chain of adjustments run on the sRGB projection of a color.
///
/// ```text
/// input -> sRGB -> Lighten -> Darken -> Desaturate -> Invert -> output
/// ```
///
/// Every stage consumes the previous stage's output. The result is always
/// an sRGB [`ColorValue`].
pub struct Pipeline {
    modules: Vec<Box<dyn AdjustmentStage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            modules: vec![
                Box::new(modules::Lighten),
                Box::new(modules::Darken),
                Box::new(modules::Desaturate),
                Box::new(modules::Invert),
            ],
        }
    }

    /// Run every stage.
    pub fn process(&self, input: &ColorValue, params: &AdjustmentParams) -> Result<ColorValue, ColorError> {
        self.process_up_to(input, params, Stage::Invert)
    }

    /// Run the stages from the first through `last`, inclusive. Used for
    /// previews of intermediate results.
    pub fn process_up_to(
        &self,
        input: &ColorValue,
        params: &AdjustmentParams,
        last: Stage,
    ) -> Result<ColorValue, ColorError> {
        let mut current: Rgb = input.to_srgb()?;
        for module in self.modules.iter().take(last.index() + 1) {
            debug!(stage = module.name(), "adjusting");
            current = module.apply(current, params);
        }
        Ok(ColorValue::Srgb(current))
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
