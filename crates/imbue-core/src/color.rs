//! Colorimetric primitives behind [`ColorValue`](crate::color_value::ColorValue).
//!
//! Everything here works on plain `[f64; 3]` coordinates. The conversions go
//! through `palette`: sRGB is taken to XYZ under its native D65 white, then
//! Bradford-adapted to the D50 profile white before the CIE L*a*b* step.

use palette::chromatic_adaptation::{AdaptFrom, Method};
use palette::convert::FromColorUnclamped;
use palette::white_point::{Any, D65, WhitePoint};
use palette::{Clamp, Lab, LinSrgb, Srgb, Xyz};

/// D50 reference white in XYZ.
pub const D50_WHITE_POINT: [f64; 3] = [0.9642, 1.0000, 0.8251];

/// Reference black in XYZ.
pub const BLACK_POINT: [f64; 3] = [0.0, 0.0, 0.0];

/// Valid range of the a and b coordinates: `[a_min, a_max, b_min, b_max]`.
pub const LAB_AB_RANGE: [f64; 4] = [-128.0, 127.0, -128.0, 127.0];

/// Rec. 709 luma weights, applied to gamma-encoded sRGB.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// D50 as the profile connection space defines it. `palette`'s own `D50`
/// carries one more digit per coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProfileD50;

impl WhitePoint<f64> for ProfileD50 {
    fn get_xyz() -> Xyz<Any, f64> {
        let [x, y, z] = D50_WHITE_POINT;
        Xyz::new(x, y, z)
    }
}

type LabD50 = Lab<ProfileD50, f64>;
type XyzD50 = Xyz<ProfileD50, f64>;
type XyzD65 = Xyz<D65, f64>;

fn clamp_ab(a: f64, b: f64) -> (f64, f64) {
    let [a_min, a_max, b_min, b_max] = LAB_AB_RANGE;
    (a.clamp(a_min, a_max), b.clamp(b_min, b_max))
}

fn all_finite(values: &[f64; 3]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Convert gamma-encoded sRGB to Lab (D50). The a and b coordinates are
/// clamped to [`LAB_AB_RANGE`].
///
/// Returns `None` when the input or the result is not finite.
pub fn srgb_to_lab(rgb: [f64; 3]) -> Option<[f64; 3]> {
    if !all_finite(&rgb) {
        return None;
    }
    let [red, green, blue] = rgb;
    let xyz = XyzD65::from_color_unclamped(Srgb::new(red, green, blue));
    let adapted = <XyzD50 as AdaptFrom<XyzD65, D65, ProfileD50, f64>>::adapt_from_using(
        xyz,
        Method::Bradford,
    );
    let lab = LabD50::from_color_unclamped(adapted);

    let (a, b) = clamp_ab(lab.a, lab.b);
    let lab = [lab.l, a, b];
    all_finite(&lab).then_some(lab)
}

/// Convert Lab (D50) to gamma-encoded sRGB. Out-of-range a and b are clamped
/// first, and the result is clipped to [0,1] in linear light.
///
/// Returns `None` when the input or the result is not finite.
pub fn lab_to_srgb(lab: [f64; 3]) -> Option<[f64; 3]> {
    if !all_finite(&lab) {
        return None;
    }
    let [l, a, b] = lab;
    let (a, b) = clamp_ab(a, b);
    let xyz = XyzD50::from_color_unclamped(LabD50::new(l, a, b));
    let adapted = <XyzD65 as AdaptFrom<XyzD50, ProfileD50, D65, f64>>::adapt_from_using(
        xyz,
        Method::Bradford,
    );

    let linear = LinSrgb::<f64>::from_color_unclamped(adapted);
    if !all_finite(&[linear.red, linear.green, linear.blue]) {
        return None;
    }
    let rgb: Srgb<f64> = Srgb::from_linear(linear.clamp());
    let rgb = [rgb.red, rgb.green, rgb.blue];
    all_finite(&rgb).then_some(rgb)
}

/// Rec. 709 luma of gamma-encoded sRGB.
pub fn luma(rgb: [f64; 3]) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr * rgb[0] + wg * rgb[1] + wb * rgb[2]
}
