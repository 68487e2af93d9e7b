use crate::color_value::Rgb;
use crate::pipeline::module::AdjustmentStage;
use crate::pipeline::modules::blend_amount;
use crate::pipeline::{AdjustmentParams, Stage};

impl Rgb {
    /// Blend each channel towards black. `0` is the identity, `1` is black.
    /// Channels already below 0 are never pushed up.
    pub fn darkened(self, amount: f64) -> Rgb {
        let Some(t) = blend_amount(amount) else {
            return self;
        };
        Rgb::from_array(self.to_array().map(|c| c.min(c * (1.0 - t))))
    }
}

pub struct Darken;

impl AdjustmentStage for Darken {
    fn stage(&self) -> Stage {
        Stage::Darken
    }

    fn apply(&self, input: Rgb, params: &AdjustmentParams) -> Rgb {
        input.darkened(params.darken)
    }
}
