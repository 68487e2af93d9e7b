use crate::color_value::Rgb;
use crate::pipeline::module::AdjustmentStage;
use crate::pipeline::modules::blend_amount;
use crate::pipeline::{AdjustmentParams, Stage};

impl Rgb {
    /// Blend each channel towards white. `0` is the identity, `1` is white.
    /// Channels already above 1 are never pulled down.
    pub fn lightened(self, amount: f64) -> Rgb {
        let Some(t) = blend_amount(amount) else {
            return self;
        };
        Rgb::from_array(self.to_array().map(|c| c.max(c * (1.0 - t) + t)))
    }
}

pub struct Lighten;

impl AdjustmentStage for Lighten {
    fn stage(&self) -> Stage {
        Stage::Lighten
    }

    fn apply(&self, input: Rgb, params: &AdjustmentParams) -> Rgb {
        input.lightened(params.lighten)
    }
}
