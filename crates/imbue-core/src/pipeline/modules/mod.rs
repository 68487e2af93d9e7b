mod darken;
mod desaturate;
mod invert;
mod lighten;

pub use darken::Darken;
pub use desaturate::Desaturate;
pub use invert::Invert;
pub use lighten::Lighten;

/// The effective blend amount, clamped into [0,1]. `None` when the stage has
/// nothing to do: zero, negative or NaN amounts all leave the color alone.
pub(crate) fn blend_amount(amount: f64) -> Option<f64> {
    if amount > 0.0 { Some(amount.min(1.0)) } else { None }
}
