use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::color;
use crate::error::{ColorError, MalformedInput};

/// CIE Lab coordinates referenced to the D50 white point.
///
/// `l` is conventionally 0..=100 and `a`/`b` live in -128..=127, but none of
/// them are clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Mid-gray, substituted when a conversion to Lab is unavailable.
    pub const NEUTRAL: Lab = Lab::new(50.0, 0.0, 0.0);

    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

/// Gamma-encoded sRGB channels, nominally in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Mid-gray, substituted when a conversion to sRGB is unavailable.
    pub const NEUTRAL: Rgb = Rgb::new(0.5, 0.5, 0.5);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels, each divided by 255.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [r, g, b] = bytes.map(|v| f64::from(v) / 255.0);
        Self { r, g, b }
    }

    /// Quantize to 8-bit channels: `round(c * 255)` clamped to 0..=255.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub(crate) fn from_array([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }

    /// Rec. 709 luma of the encoded channels.
    pub fn luma(self) -> f64 {
        color::luma(self.to_array())
    }
}

/// Which representation a [`ColorValue`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    LabD50,
    Srgb,
}

impl ColorKind {
    /// Discriminant used in the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorKind::LabD50 => "labD50",
            ColorKind::Srgb => "sRGB",
        }
    }

    fn fields(self) -> [&'static str; 3] {
        match self {
            ColorKind::LabD50 => ["l", "a", "b"],
            ColorKind::Srgb => ["r", "g", "b"],
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKind {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labD50" => Ok(ColorKind::LabD50),
            "sRGB" => Ok(ColorKind::Srgb),
            other => Err(MalformedInput::UnknownKind(other.to_owned())),
        }
    }
}

/// A color stored as exactly one of Lab (D50) or sRGB. Alpha is always 1.
///
/// Equality compares the variant first: a Lab value never equals an sRGB
/// value, even when both describe the same color.
///
/// Serialized as a flat map, e.g. `{"kind": "sRGB", "r": 1, "g": 0, "b": 0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ColorValue {
    #[serde(rename = "labD50")]
    LabD50(Lab),
    #[serde(rename = "sRGB")]
    Srgb(Rgb),
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::LabD50(Lab::NEUTRAL)
    }
}

impl From<Lab> for ColorValue {
    fn from(lab: Lab) -> Self {
        ColorValue::LabD50(lab)
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Srgb(rgb)
    }
}

impl ColorValue {
    pub const fn lab_d50(l: f64, a: f64, b: f64) -> Self {
        ColorValue::LabD50(Lab::new(l, a, b))
    }

    pub const fn srgb(r: f64, g: f64, b: f64) -> Self {
        ColorValue::Srgb(Rgb::new(r, g, b))
    }

    pub fn kind(&self) -> ColorKind {
        match self {
            ColorValue::LabD50(_) => ColorKind::LabD50,
            ColorValue::Srgb(_) => ColorKind::Srgb,
        }
    }

    fn unavailable(&self, to: ColorKind) -> ColorError {
        ColorError::ConversionUnavailable {
            from: self.kind(),
            to,
        }
    }

    /// The sRGB coordinates of this color, converting from Lab if needed.
    pub fn to_srgb(&self) -> Result<Rgb, ColorError> {
        match *self {
            ColorValue::Srgb(rgb) => Ok(rgb),
            ColorValue::LabD50(lab) => color::lab_to_srgb(lab.to_array())
                .map(Rgb::from_array)
                .ok_or_else(|| self.unavailable(ColorKind::Srgb)),
        }
    }

    /// The Lab coordinates of this color, converting from sRGB if needed.
    pub fn to_lab_d50(&self) -> Result<Lab, ColorError> {
        match *self {
            ColorValue::LabD50(lab) => Ok(lab),
            ColorValue::Srgb(rgb) => color::srgb_to_lab(rgb.to_array())
                .map(|[l, a, b]| Lab::new(l, a, b))
                .ok_or_else(|| self.unavailable(ColorKind::LabD50)),
        }
    }

    /// Re-express this color in another representation. Converting to the
    /// current kind returns the value unchanged.
    pub fn convert(&self, to: ColorKind) -> Result<ColorValue, ColorError> {
        match to {
            ColorKind::LabD50 => self.to_lab_d50().map(ColorValue::LabD50),
            ColorKind::Srgb => self.to_srgb().map(ColorValue::Srgb),
        }
    }

    /// Lab lightness of this color.
    pub fn luminosity(&self) -> Result<f64, ColorError> {
        self.to_lab_d50().map(|lab| lab.l)
    }

    /// Neutral gray of the same lightness.
    pub fn to_monochrome_lab_d50(&self) -> Result<Lab, ColorError> {
        self.luminosity().map(|l| Lab::new(l, 0.0, 0.0))
    }

    /// Lab coordinates, or [`Lab::NEUTRAL`] when the conversion fails.
    pub fn lab_or_default(&self) -> Lab {
        self.to_lab_d50().unwrap_or_else(|err| {
            warn!(%err, "substituting neutral Lab");
            Lab::NEUTRAL
        })
    }

    /// sRGB coordinates, or [`Rgb::NEUTRAL`] when the conversion fails.
    /// This is also what a presentation layer renders.
    pub fn srgb_or_default(&self) -> Rgb {
        self.to_srgb().unwrap_or_else(|err| {
            warn!(%err, "substituting neutral sRGB");
            Rgb::NEUTRAL
        })
    }

    /// Overwrite this value with a new representation. The previous
    /// coordinates are discarded, not converted.
    pub fn replace_with(&mut self, value: impl Into<ColorValue>) {
        *self = value.into();
    }

    /// `#rrggbb` of the sRGB projection, mid-gray if it is unavailable.
    pub fn hex_string(&self) -> String {
        self.srgb_or_default().to_hex()
    }

    /// Flat map with a `kind` discriminant and the three coordinates of the
    /// stored variant.
    pub fn to_dictionary(&self) -> Map<String, Value> {
        let (kind, values) = match *self {
            ColorValue::LabD50(lab) => (ColorKind::LabD50, lab.to_array()),
            ColorValue::Srgb(rgb) => (ColorKind::Srgb, rgb.to_array()),
        };

        let mut map = Map::new();
        map.insert("kind".to_owned(), Value::from(kind.as_str()));
        for (field, value) in kind.fields().into_iter().zip(values) {
            map.insert(field.to_owned(), Value::from(value));
        }
        map
    }

    /// Strict inverse of [`to_dictionary`](Self::to_dictionary), decoded
    /// through the same serde form as [`ColorValue`]'s `Deserialize`.
    /// Unknown keys are ignored; a missing or unknown kind, or a missing or
    /// non-numeric coordinate, rejects the whole map.
    pub fn from_dictionary(map: &Map<String, Value>) -> Result<ColorValue, ColorError> {
        let kind: ColorKind = map
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(MalformedInput::MissingKind)?
            .parse()?;

        let value = ColorValue::deserialize(Value::Object(map.clone())).map_err(|err| {
            MalformedInput::InvalidCoordinates {
                kind,
                reason: err.to_string(),
            }
        })?;
        Ok(value)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::LabD50(Lab { l, a, b }) => write!(f, "lab({l}, {a}, {b})"),
            ColorValue::Srgb(Rgb { r, g, b }) => write!(f, "srgb({r}, {g}, {b})"),
        }
    }
}
