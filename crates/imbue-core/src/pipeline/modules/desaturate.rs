use crate::color_value::Rgb;
use crate::pipeline::module::AdjustmentStage;
use crate::pipeline::modules::blend_amount;
use crate::pipeline::{AdjustmentParams, Stage};

impl Rgb {
    /// Blend each channel towards the Rec. 709 luma of the color. `0` is the
    /// identity, `1` is a gray of the same luma. Chroma shrinks
    /// monotonically for channels in [0,1].
    pub fn desaturated(self, amount: f64) -> Rgb {
        let Some(t) = blend_amount(amount) else {
            return self;
        };
        let y = self.luma();
        Rgb::from_array(self.to_array().map(|c| c * (1.0 - t) + y * t))
    }
}

pub struct Desaturate;

impl AdjustmentStage for Desaturate {
    fn stage(&self) -> Stage {
        Stage::Desaturate
    }

    fn apply(&self, input: Rgb, params: &AdjustmentParams) -> Rgb {
        input.desaturated(params.desaturate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_value::ColorValue;

    fn spread(rgb: Rgb) -> f64 {
        rgb.r.max(rgb.g).max(rgb.b) - rgb.r.min(rgb.g).min(rgb.b)
    }

    #[test]
    fn identity_noop() {
        let rgb = Rgb::new(0.8, 0.3, 0.1);
        let result = Desaturate.apply(rgb, &AdjustmentParams::default());
        assert_eq!(result, rgb);
    }

    #[test]
    fn full_amount_produces_grayscale() {
        let rgb = Rgb::new(0.8, 0.3, 0.1);
        let y = 0.2126 * 0.8 + 0.7152 * 0.3 + 0.0722 * 0.1;
        let result = rgb.desaturated(1.0);
        for v in [result.r, result.g, result.b] {
            assert!(
                (v - y).abs() < 1e-12,
                "fully desaturated channels should equal Y={y}, got {v}"
            );
        }
    }

    #[test]
    fn nan_amount_is_identity() {
        let rgb = Rgb::new(0.8, 0.3, 0.1);
        assert_eq!(rgb.desaturated(f64::NAN), rgb);
        assert_eq!(rgb.desaturated(-0.5), rgb);
    }

    #[test]
    fn gray_stays_gray() {
        let rgb = Rgb::new(0.5, 0.5, 0.5);
        for amount in [0.25, 0.5, 1.0] {
            let result = rgb.desaturated(amount);
            assert!(spread(result) < 1e-12, "gray drifted at {amount}: {result:?}");
            assert!((result.r - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn spread_shrinks_with_amount() {
        let rgb = Rgb::new(0.8, 0.3, 0.1);
        let mut prev = f64::INFINITY;
        for i in 0..=10 {
            let amount = i as f64 / 10.0;
            let s = spread(rgb.desaturated(amount));
            assert!(s <= prev, "spread grew at {amount}: {s} > {prev}");
            prev = s;
        }
        assert!(prev < 1e-12);
    }

    #[test]
    fn chroma_moves_towards_zero() {
        let rgb = Rgb::new(0.8, 0.3, 0.1);
        let mut prev = f64::INFINITY;
        for i in 0..=10 {
            let amount = i as f64 / 10.0;
            let lab = ColorValue::Srgb(rgb.desaturated(amount)).to_lab_d50().unwrap();
            let chroma = lab.chroma();
            assert!(chroma <= prev + 1e-9, "chroma grew at {amount}: {chroma} > {prev}");
            prev = chroma;
        }
        assert!(prev < 0.1, "fully desaturated chroma should be ~0, got {prev}");
    }
}
