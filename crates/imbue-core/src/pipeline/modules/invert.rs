use crate::color_value::Rgb;
use crate::pipeline::module::AdjustmentStage;
use crate::pipeline::{AdjustmentParams, Stage};

impl Rgb {
    /// Complement each channel: `1 - c`.
    pub fn inverted(self) -> Rgb {
        Rgb::from_array(self.to_array().map(|c| 1.0 - c))
    }
}

/// Gated on `params.invert`; there is no partial inversion.
pub struct Invert;

impl AdjustmentStage for Invert {
    fn stage(&self) -> Stage {
        Stage::Invert
    }

    fn apply(&self, input: Rgb, params: &AdjustmentParams) -> Rgb {
        if params.invert { input.inverted() } else { input }
    }
}
