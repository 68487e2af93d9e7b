use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use imbue_core::{
    AdjustableColorSession, Clipboard, ColorKind, ColorValue, Lab, MemoryClipboard, Rgb,
    SavedColorId, SavedColors, Stage,
};

use crate::cli::{Commands, EditArgs};

/// Headless stand-in for the editor UI: owns the session and feeds it
/// edits. All color math stays in `imbue-core`.
pub struct App {
    session: AdjustableColorSession,
    saved: SavedColors,
    clipboard: MemoryClipboard,
    preview_stage: Stage,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Input color
    LabChanged(Lab),
    SrgbChanged(Rgb),
    HexEntered(String),

    // Adjustments
    LightenChanged(f64),
    DarkenChanged(f64),
    DesaturateChanged(f64),
    InvertToggled(bool),
    PreviewStageSelected(Stage),

    // Clipboard and saved colors
    CopyOutput,
    PasteInput,
    SaveOutput,
}

impl App {
    pub fn new(session: AdjustableColorSession) -> Self {
        Self {
            session,
            saved: SavedColors::new(),
            clipboard: MemoryClipboard::new(),
            preview_stage: Stage::Invert,
        }
    }

    pub fn update(&mut self, message: Message) {
        debug!(?message, "update");
        match message {
            Message::LabChanged(lab) => self.session.set_lab(lab),
            Message::SrgbChanged(rgb) => self.session.set_srgb(rgb),
            Message::HexEntered(text) => {
                // Typing an incomplete hex string keeps the current color.
                if let Ok(rgb) = Rgb::from_hex(&text) {
                    self.session.set_srgb(rgb);
                }
            }

            Message::LightenChanged(v) => self.session.params.lighten = v,
            Message::DarkenChanged(v) => self.session.params.darken = v,
            Message::DesaturateChanged(v) => self.session.params.desaturate = v,
            Message::InvertToggled(on) => self.session.params.invert = on,
            Message::PreviewStageSelected(stage) => self.preview_stage = stage,

            Message::CopyOutput => {
                self.session.copy_output(&mut self.clipboard);
            }
            Message::PasteInput => {
                self.session.paste_input(&self.clipboard);
            }
            Message::SaveOutput => {
                if let Some(id) = self.save_output() {
                    info!(?id, "saved color");
                }
            }
        }
    }

    /// Replay command-line edits: input replacements first, then clipboard
    /// and saved-list actions on the resulting output.
    pub fn apply_edits(&mut self, edits: EditArgs) {
        if let Some([l, a, b]) = edits.set_lab.as_deref().and_then(triple) {
            self.update(Message::LabChanged(Lab::new(l, a, b)));
        }
        if let Some([r, g, b]) = edits.set_srgb.as_deref().and_then(triple) {
            self.update(Message::SrgbChanged(Rgb::new(r, g, b)));
        }
        if let Some(hex) = edits.hex {
            self.update(Message::HexEntered(hex));
        }
        if let Some(text) = edits.paste {
            self.clipboard.write(&text);
            self.update(Message::PasteInput);
        }
        if edits.copy {
            self.update(Message::CopyOutput);
        }
        if edits.save {
            self.update(Message::SaveOutput);
        }
    }

    fn save_output(&mut self) -> Option<SavedColorId> {
        let color = self.session.output_color().ok()?;
        Some(self.saved.push(color))
    }

    /// The color shown in the preview swatch.
    pub fn preview(&self) -> Result<ColorValue> {
        self.session
            .output_color_up_to(self.preview_stage)
            .context("input color has no sRGB form")
    }

    /// Text rendering of input and preview, then the clipboard and saved
    /// colors when there are any.
    pub fn render(&self) -> Result<String> {
        let preview = self.preview()?;
        let mut out = String::new();
        writeln!(out, "input   {}", describe(&self.session.input_color))?;
        write!(out, "output  {}", describe(&preview))?;
        if self.preview_stage != Stage::Invert {
            write!(out, "  (after {})", self.preview_stage.name())?;
        }
        if let Some(text) = self.clipboard.read() {
            write!(out, "\nclipboard {text}")?;
        }
        for entry in self.saved.iter() {
            write!(out, "\nsaved   {}", describe(&entry.color))?;
        }
        Ok(out)
    }
}

fn triple(values: &[f64]) -> Option<[f64; 3]> {
    values.try_into().ok()
}

fn describe(color: &ColorValue) -> String {
    let lab = color.lab_or_default();
    format!(
        "{}  {}  L={:.1} a={:.1} b={:.1}",
        color.hex_string(),
        color,
        lab.l,
        lab.a,
        lab.b
    )
}

/// Parse a color argument: a JSON color object such as
/// `{"kind": "labD50", "l": 50, "a": 0, "b": 0}`, or a hex string.
pub fn parse_color(text: &str) -> Result<ColorValue> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        let value: serde_json::Value =
            serde_json::from_str(trimmed).context("color is not valid JSON")?;
        let Some(map) = value.as_object() else {
            bail!("color JSON must be an object");
        };
        return ColorValue::from_dictionary(map).context("invalid color object");
    }

    let rgb = Rgb::from_hex(trimmed).with_context(|| format!("invalid hex color {text:?}"))?;
    Ok(ColorValue::Srgb(rgb))
}

pub fn load_session(path: &Path) -> Result<AdjustableColorSession> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    AdjustableColorSession::from_json(&json)
}

pub fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Adjust {
            color,
            lighten,
            darken,
            desaturate,
            invert,
            up_to,
            edits,
        } => {
            let mut app = App::new(AdjustableColorSession::new(parse_color(&color)?));
            app.update(Message::LightenChanged(lighten));
            app.update(Message::DarkenChanged(darken));
            app.update(Message::DesaturateChanged(desaturate));
            app.update(Message::InvertToggled(invert));
            if let Some(stage) = up_to {
                app.update(Message::PreviewStageSelected(stage.into()));
            }
            app.apply_edits(edits);
            app.render()
        }

        Commands::Convert { color, to } => {
            let color = parse_color(&color)?;
            let kind = ColorKind::from(to);
            let converted = color
                .convert(kind)
                .with_context(|| format!("cannot convert {color} to {kind}"))?;
            let json = serde_json::to_string(&converted)?;
            Ok(format!("{converted}\n{json}"))
        }

        Commands::Session { path, up_to, edits } => {
            let session = load_session(&path)?;
            info!(path = %path.display(), "session loaded");
            let mut app = App::new(session);
            if let Some(stage) = up_to {
                app.update(Message::PreviewStageSelected(stage.into()));
            }
            app.apply_edits(edits);
            app.render()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::cli::{KindArg, StageArg};

    #[test]
    fn parse_hex_argument() {
        assert_eq!(parse_color("#ff0000").unwrap(), ColorValue::srgb(1.0, 0.0, 0.0));
        assert_eq!(parse_color(" 00ff00 ").unwrap(), ColorValue::srgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn parse_json_argument() {
        let color = parse_color(r#"{"kind": "labD50", "l": 50, "a": 0, "b": 0}"#).unwrap();
        assert_eq!(color, ColorValue::lab_d50(50.0, 0.0, 0.0));
    }

    #[test]
    fn parse_rejects_bad_arguments() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color(r#"{"kind": "unknown"}"#).is_err());
        assert!(parse_color("{not json").is_err());
    }

    #[test]
    fn sliders_drive_output() {
        let mut app = App::new(AdjustableColorSession::new(ColorValue::srgb(0.0, 0.0, 0.0)));
        app.update(Message::LightenChanged(0.5));
        assert_eq!(app.preview().unwrap(), ColorValue::srgb(0.5, 0.5, 0.5));
        app.update(Message::DarkenChanged(1.0));
        assert_eq!(app.preview().unwrap(), ColorValue::srgb(0.0, 0.0, 0.0));
        app.update(Message::PreviewStageSelected(Stage::Lighten));
        assert_eq!(app.preview().unwrap(), ColorValue::srgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn hex_entry_ignores_partial_input() {
        let mut app = App::new(AdjustableColorSession::default());
        app.update(Message::HexEntered("#12".into()));
        assert_eq!(app.session.input_color, ColorValue::lab_d50(50.0, 0.0, 0.0));
        app.update(Message::HexEntered("#123456".into()));
        assert_eq!(app.session.input_color.kind(), ColorKind::Srgb);
    }

    #[test]
    fn copy_then_paste_moves_output_to_input() {
        let mut app = App::new(AdjustableColorSession::new(ColorValue::srgb(1.0, 1.0, 1.0)));
        app.update(Message::InvertToggled(true));
        app.update(Message::CopyOutput);
        app.update(Message::InvertToggled(false));
        app.update(Message::PasteInput);
        assert_eq!(app.session.input_color, ColorValue::srgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn save_output_appends() {
        let mut app = App::new(AdjustableColorSession::new(ColorValue::srgb(0.25, 0.75, 0.5)));
        app.update(Message::SaveOutput);
        app.update(Message::LabChanged(Lab::new(30.0, 0.0, 0.0)));
        app.update(Message::SaveOutput);
        assert_eq!(app.saved.len(), 2);
        let first = app.saved.iter().next().unwrap();
        assert_eq!(first.color, ColorValue::srgb(0.25, 0.75, 0.5));
    }

    #[test]
    fn adjust_command_renders_output() {
        let report = run(Commands::Adjust {
            color: "#000000".into(),
            lighten: 0.0,
            darken: 0.0,
            desaturate: 0.0,
            invert: true,
            up_to: None,
            edits: EditArgs::default(),
        })
        .unwrap();
        assert!(report.contains("output  #ffffff"), "report was:\n{report}");
    }

    #[test]
    fn adjust_command_preview_stage() {
        let report = run(Commands::Adjust {
            color: "#000000".into(),
            lighten: 1.0,
            darken: 0.0,
            desaturate: 0.0,
            invert: true,
            up_to: Some(StageArg::Darken),
            edits: EditArgs::default(),
        })
        .unwrap();
        assert!(report.contains("output  #ffffff"), "report was:\n{report}");
        assert!(report.contains("(after darken)"), "report was:\n{report}");
    }

    #[test]
    fn convert_command_prints_json() {
        let report = run(Commands::Convert {
            color: r#"{"kind": "labD50", "l": 100, "a": 0, "b": 0}"#.into(),
            to: KindArg::Srgb,
        })
        .unwrap();
        assert!(report.contains(r#""kind":"sRGB""#), "report was:\n{report}");
    }

    #[test]
    fn session_command_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"input_color": {{"kind": "sRGB", "r": 0.25, "g": 0.75, "b": 0.5}}, "params": {{"invert": true}}}}"#
        )
        .unwrap();

        let report = run(Commands::Session {
            path: file.path().to_path_buf(),
            up_to: None,
            edits: EditArgs::default(),
        })
        .unwrap();
        // 1 - 0.25 = 0.75 -> bf, 1 - 0.75 = 0.25 -> 40, 1 - 0.5 = 0.5 -> 80
        assert!(report.contains("output  #bf4080"), "report was:\n{report}");
    }

    #[test]
    fn session_command_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(Commands::Session {
            path: dir.path().join("missing.json"),
            up_to: None,
            edits: EditArgs::default(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn edits_paste_copy_and_save() {
        let report = run(Commands::Adjust {
            color: "#000000".into(),
            lighten: 0.0,
            darken: 0.0,
            desaturate: 0.0,
            invert: true,
            up_to: None,
            edits: EditArgs {
                paste: Some("#ff0000".into()),
                copy: true,
                save: true,
                ..Default::default()
            },
        })
        .unwrap();
        assert!(report.contains("output  #00ffff"), "report was:\n{report}");
        assert!(report.contains("clipboard #00ffff"), "report was:\n{report}");
        assert!(report.contains("saved   #00ffff"), "report was:\n{report}");
    }

    #[test]
    fn edits_replace_input() {
        let mut app = App::new(AdjustableColorSession::default());
        app.apply_edits(EditArgs {
            set_srgb: Some(vec![0.0, 0.0, 1.0]),
            ..Default::default()
        });
        assert_eq!(app.session.input_color, ColorValue::srgb(0.0, 0.0, 1.0));

        app.apply_edits(EditArgs {
            set_lab: Some(vec![40.0, -20.0, 10.0]),
            ..Default::default()
        });
        assert_eq!(app.session.input_color, ColorValue::lab_d50(40.0, -20.0, 10.0));

        app.apply_edits(EditArgs {
            hex: Some("#zzzzzz".into()),
            ..Default::default()
        });
        assert_eq!(app.session.input_color, ColorValue::lab_d50(40.0, -20.0, 10.0));
    }

    #[test]
    fn cli_parses_edit_flags() {
        use clap::Parser;

        let cli = crate::cli::Cli::try_parse_from([
            "imbue", "adjust", "#101010", "--set-lab", "50", "-10", "20", "--copy",
        ])
        .unwrap();
        let Commands::Adjust { edits, .. } = cli.command else {
            panic!("expected adjust");
        };
        assert_eq!(edits.set_lab, Some(vec![50.0, -10.0, 20.0]));
        assert!(edits.copy);
        assert!(!edits.save);
    }
}
