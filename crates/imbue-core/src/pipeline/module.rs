use crate::color_value::Rgb;
use crate::pipeline::{AdjustmentParams, Stage};

/// A single step in the adjustment pipeline.
pub trait AdjustmentStage: Send + Sync {
    fn stage(&self) -> Stage;
    fn apply(&self, input: Rgb, params: &AdjustmentParams) -> Rgb;

    fn name(&self) -> &str {
        self.stage().name()
    }
}
