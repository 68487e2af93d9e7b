use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use imbue_core::{ColorKind, Stage};

#[derive(Parser)]
#[command(name = "imbue")]
#[command(version, about = "Lab and sRGB color adjustment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the adjustment pipeline on a color
    Adjust {
        /// Hex color (#rrggbb) or a JSON color object
        #[arg(value_name = "COLOR")]
        color: String,

        /// Blend towards white, 0..1
        #[arg(long, value_name = "AMOUNT", default_value_t = 0.0)]
        lighten: f64,

        /// Blend towards black, 0..1
        #[arg(long, value_name = "AMOUNT", default_value_t = 0.0)]
        darken: f64,

        /// Blend towards gray, 0..1
        #[arg(long, value_name = "AMOUNT", default_value_t = 0.0)]
        desaturate: f64,

        /// Invert the result
        #[arg(long)]
        invert: bool,

        /// Stop after this stage
        #[arg(long, value_name = "STAGE")]
        up_to: Option<StageArg>,

        #[command(flatten)]
        edits: EditArgs,
    },

    /// Convert a color to Lab (D50) or sRGB
    Convert {
        /// Hex color (#rrggbb) or a JSON color object
        #[arg(value_name = "COLOR")]
        color: String,

        /// Target color space
        #[arg(long, value_name = "SPACE")]
        to: KindArg,
    },

    /// Load a session document and print its output color
    Session {
        /// JSON session file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Stop after this stage
        #[arg(long, value_name = "STAGE")]
        up_to: Option<StageArg>,

        #[command(flatten)]
        edits: EditArgs,
    },
}

/// Edits replayed against the session before it is printed, in the order
/// listed here.
#[derive(Args, Clone, Debug, Default)]
pub struct EditArgs {
    /// Replace the input color with Lab (D50) coordinates
    #[arg(long, num_args = 3, value_names = ["L", "A", "B"], allow_negative_numbers = true)]
    pub set_lab: Option<Vec<f64>>,

    /// Replace the input color with sRGB channels
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
    pub set_srgb: Option<Vec<f64>>,

    /// Type a hex color into the input; ignored unless it parses
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Place text on the clipboard and paste it as the input color
    #[arg(long, value_name = "TEXT")]
    pub paste: Option<String>,

    /// Copy the output color to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Keep the output color in the saved list
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StageArg {
    Lighten,
    Darken,
    Desaturate,
    Invert,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Lighten => Stage::Lighten,
            StageArg::Darken => Stage::Darken,
            StageArg::Desaturate => Stage::Desaturate,
            StageArg::Invert => Stage::Invert,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Lab,
    Srgb,
}

impl From<KindArg> for ColorKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Lab => ColorKind::LabD50,
            KindArg::Srgb => ColorKind::Srgb,
        }
    }
}
