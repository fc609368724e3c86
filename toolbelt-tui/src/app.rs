//! Application state — single-owner, main-thread only.
//!
//! One state struct per panel, the overlay service, and the cross-cutting
//! status line all live here.

use rand::thread_rng;

use toolbelt_core::calc::CalculatorState;
use toolbelt_core::color::{Hsl, Rgb};
use toolbelt_core::json::JsonReport;
use toolbelt_core::password::{self, PasswordSpec};
use toolbelt_core::stats::TextStats;
use toolbelt_core::text::{self, CaseAction};
use toolbelt_core::units::{self, LengthUnit};
use toolbelt_core::{encode, json, qr};

use crate::config::Config;
use crate::overlay::{Overlays, PendingAction};

/// Which panel is active. Exactly one is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Text,
    Stats,
    Json,
    Encode,
    Color,
    Password,
    Qr,
    Calc,
    Units,
    Help,
}

impl Panel {
    pub const COUNT: usize = 10;

    pub fn index(self) -> usize {
        match self {
            Panel::Text => 0,
            Panel::Stats => 1,
            Panel::Json => 2,
            Panel::Encode => 3,
            Panel::Color => 4,
            Panel::Password => 5,
            Panel::Qr => 6,
            Panel::Calc => 7,
            Panel::Units => 8,
            Panel::Help => 9,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Text),
            1 => Some(Panel::Stats),
            2 => Some(Panel::Json),
            3 => Some(Panel::Encode),
            4 => Some(Panel::Color),
            5 => Some(Panel::Password),
            6 => Some(Panel::Qr),
            7 => Some(Panel::Calc),
            8 => Some(Panel::Units),
            9 => Some(Panel::Help),
            _ => None,
        }
    }

    /// String tool key, for config files and tests. Unknown keys map to
    /// `None` rather than deactivating anything.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "text" => Some(Panel::Text),
            "stats" => Some(Panel::Stats),
            "json" => Some(Panel::Json),
            "encode" => Some(Panel::Encode),
            "color" => Some(Panel::Color),
            "password" => Some(Panel::Password),
            "qr" => Some(Panel::Qr),
            "calc" | "calculator" => Some(Panel::Calc),
            "units" => Some(Panel::Units),
            "help" => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Text => "Text",
            Panel::Stats => "Stats",
            Panel::Json => "JSON",
            Panel::Encode => "Encode",
            Panel::Color => "Color",
            Panel::Password => "Password",
            Panel::Qr => "QR",
            Panel::Calc => "Calc",
            Panel::Units => "Units",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Text)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Text)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Default)]
pub struct TextPanelState {
    pub input: String,
    pub output: String,
}

#[derive(Debug)]
pub struct StatsPanelState {
    pub input: String,
    pub stats: TextStats,
}

impl Default for StatsPanelState {
    fn default() -> Self {
        Self {
            input: String::new(),
            stats: TextStats::of(""),
        }
    }
}

#[derive(Debug, Default)]
pub struct JsonPanelState {
    pub input: String,
    pub output: String,
    pub report: Option<JsonReport>,
}

#[derive(Debug, Default)]
pub struct EncodePanelState {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Default)]
pub struct ColorPanelState {
    pub input: String,
    pub rgb: Option<Rgb>,
    pub hsl: Option<Hsl>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct PasswordPanelState {
    pub spec: PasswordSpec,
    pub generated: String,
}

#[derive(Debug, Default)]
pub struct QrPanelState {
    pub input: String,
    pub rendered: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct CalcPanelState {
    pub calc: CalculatorState,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct UnitsPanelState {
    pub input: String,
    pub from: LengthUnit,
    pub to: LengthUnit,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl Default for UnitsPanelState {
    fn default() -> Self {
        Self {
            input: String::new(),
            from: LengthUnit::Meter,
            to: LengthUnit::Foot,
            result: None,
            error: None,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,
    /// Edit mode: printable keys go into the active panel's input buffer.
    pub editing: bool,

    pub overlays: Overlays,
    pub show_history: bool,
    pub history_scroll: usize,
    pub status_message: Option<(String, StatusLevel)>,

    pub text: TextPanelState,
    pub stats: StatsPanelState,
    pub json: JsonPanelState,
    pub encode: EncodePanelState,
    pub color: ColorPanelState,
    pub password: PasswordPanelState,
    pub qr: QrPanelState,
    pub calc: CalcPanelState,
    pub units: UnitsPanelState,

    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            active_panel: Panel::Text,
            running: true,
            editing: false,
            overlays: Overlays::new(),
            show_history: false,
            history_scroll: 0,
            status_message: None,
            text: TextPanelState::default(),
            stats: StatsPanelState::default(),
            json: JsonPanelState::default(),
            encode: EncodePanelState::default(),
            color: ColorPanelState {
                input: "#3498DB".to_string(),
                ..ColorPanelState::default()
            },
            password: PasswordPanelState {
                spec: config.password_spec(),
                generated: String::new(),
            },
            qr: QrPanelState::default(),
            calc: CalcPanelState::default(),
            units: UnitsPanelState::default(),
            config,
        };
        // The color panel converts its seed value at startup.
        app.color_convert();
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn select_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
        self.editing = false;
    }

    /// Ask before quitting; the quit itself is the dialog's deferred action.
    pub fn request_quit(&mut self) {
        self.overlays
            .confirm("Quit", "Quit Toolbelt?", PendingAction::Quit);
    }

    /// Ask before clearing a panel that holds input; clear empty panels
    /// immediately.
    pub fn request_clear(&mut self) {
        let panel = self.active_panel;
        if self.panel_input(panel).is_some_and(|s| !s.is_empty()) {
            self.overlays.confirm(
                "Clear",
                format!("Discard the {} panel's input?", panel.label()),
                PendingAction::ClearPanel(panel),
            );
        } else {
            self.clear_panel(panel);
        }
    }

    /// Run a dialog's deferred action after the user confirmed it.
    pub fn apply_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::Quit => self.running = false,
            PendingAction::ClearPanel(panel) => {
                self.clear_panel(panel);
                self.set_status(format!("{} panel cleared", panel.label()));
            }
        }
    }

    pub fn clear_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Text => {
                self.text.input.clear();
                self.text.output.clear();
            }
            Panel::Stats => {
                self.stats.input.clear();
                self.stats.stats = TextStats::of("");
            }
            Panel::Json => {
                self.json.input.clear();
                self.json.output.clear();
                self.json.report = None;
            }
            Panel::Encode => {
                self.encode.input.clear();
                self.encode.output.clear();
            }
            Panel::Color => {
                self.color.input.clear();
                self.color.rgb = None;
                self.color.hsl = None;
                self.color.error = None;
            }
            Panel::Password => self.password.generated.clear(),
            Panel::Qr => {
                self.qr.input.clear();
                self.qr.rendered = None;
                self.qr.error = None;
            }
            Panel::Calc => {
                self.calc.calc.clear();
                self.calc.error = None;
            }
            Panel::Units => {
                self.units.input.clear();
                self.units.result = None;
                self.units.error = None;
            }
            Panel::Help => {}
        }
    }

    /// The editable input buffer of a panel, if it has one.
    pub fn panel_input(&self, panel: Panel) -> Option<&String> {
        match panel {
            Panel::Text => Some(&self.text.input),
            Panel::Stats => Some(&self.stats.input),
            Panel::Json => Some(&self.json.input),
            Panel::Encode => Some(&self.encode.input),
            Panel::Color => Some(&self.color.input),
            Panel::Qr => Some(&self.qr.input),
            Panel::Units => Some(&self.units.input),
            Panel::Password | Panel::Calc | Panel::Help => None,
        }
    }

    pub fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active_panel {
            Panel::Text => Some(&mut self.text.input),
            Panel::Stats => Some(&mut self.stats.input),
            Panel::Json => Some(&mut self.json.input),
            Panel::Encode => Some(&mut self.encode.input),
            Panel::Color => Some(&mut self.color.input),
            Panel::Qr => Some(&mut self.qr.input),
            Panel::Units => Some(&mut self.units.input),
            Panel::Password | Panel::Calc | Panel::Help => None,
        }
    }

    /// Whether edit mode makes sense on the active panel.
    pub fn active_panel_editable(&self) -> bool {
        self.panel_input(self.active_panel).is_some()
    }

    /// Whether the active panel's input spans multiple lines (Enter inserts
    /// a newline instead of triggering the panel action).
    pub fn active_input_multiline(&self) -> bool {
        matches!(
            self.active_panel,
            Panel::Text | Panel::Stats | Panel::Json | Panel::Encode | Panel::Qr
        )
    }

    /// Live updates after an edit-mode keystroke.
    pub fn after_edit(&mut self) {
        if self.active_panel == Panel::Stats {
            self.stats.stats = TextStats::of(&self.stats.input);
        }
    }

    // ── Panel operations ─────────────────────────────────────────────

    pub fn text_transform(&mut self, action: CaseAction) {
        self.text.output = text::transform(&self.text.input, action);
        self.set_status(format!("Applied {}", action.label()));
    }

    pub fn json_pretty(&mut self) {
        match json::pretty(&self.json.input) {
            Ok(out) => {
                self.json.output = out;
                self.set_status("Formatted");
            }
            // Input preserved for correction; the parser's message is the output.
            Err(err) => self.json.output = err.to_string(),
        }
    }

    pub fn json_minify(&mut self) {
        match json::minify(&self.json.input) {
            Ok(out) => {
                self.json.output = out;
                self.set_status("Minified");
            }
            Err(err) => self.json.output = err.to_string(),
        }
    }

    pub fn json_analyze(&mut self) {
        match json::analyze(&self.json.input) {
            Ok(report) => {
                self.json.report = Some(report);
                self.set_status("Analyzed");
            }
            Err(err) => {
                self.json.report = None;
                self.json.output = err.to_string();
            }
        }
    }

    pub fn encode_base64(&mut self) {
        self.encode.output = encode::base64_encode(&self.encode.input);
    }

    pub fn decode_base64(&mut self) {
        match encode::base64_decode(&self.encode.input) {
            Ok(out) => self.encode.output = out,
            Err(err) => self.encode.output = err.to_string(),
        }
    }

    pub fn encode_url(&mut self) {
        self.encode.output = encode::url_encode(&self.encode.input);
    }

    pub fn decode_url(&mut self) {
        match encode::url_decode(&self.encode.input) {
            Ok(out) => self.encode.output = out,
            Err(err) => self.encode.output = err.to_string(),
        }
    }

    pub fn color_convert(&mut self) {
        match Rgb::from_hex(&self.color.input) {
            Ok(rgb) => {
                self.color.rgb = Some(rgb);
                self.color.hsl = Some(Hsl::from(rgb));
                self.color.error = None;
            }
            Err(err) => {
                self.color.rgb = None;
                self.color.hsl = None;
                self.color.error = Some(err.to_string());
            }
        }
    }

    pub fn password_generate(&mut self) {
        match password::generate(&self.password.spec, &mut thread_rng()) {
            Ok(generated) => {
                self.password.generated = generated;
                self.set_status("Password generated");
            }
            Err(err) => {
                self.overlays.warning(err.to_string());
            }
        }
    }

    pub fn qr_generate(&mut self) {
        match qr::render(&self.qr.input, self.config.qr_quiet_zone) {
            Ok(rendered) => {
                self.qr.rendered = Some(rendered);
                self.qr.error = None;
            }
            // Inline error in place of the image; the tool stays usable.
            Err(err) => {
                self.qr.rendered = None;
                self.qr.error = Some(err.to_string());
            }
        }
    }

    pub fn calc_evaluate(&mut self) {
        match self.calc.calc.evaluate() {
            Ok(_) => self.calc.error = None,
            Err(err) => self.calc.error = Some(err.to_string()),
        }
    }

    pub fn units_convert(&mut self) {
        match self.units.input.trim().parse::<f64>() {
            Ok(value) => {
                self.units.result =
                    Some(units::format_conversion(value, self.units.from, self.units.to));
                self.units.error = None;
            }
            Err(_) => {
                self.units.result = None;
                self.units.error = Some("enter a valid number".to_string());
            }
        }
    }

    /// The active panel's primary output, used by copy-to-clipboard.
    pub fn output_text(&self) -> Option<String> {
        let out = match self.active_panel {
            Panel::Text => self.text.output.clone(),
            Panel::Stats => {
                let s = self.stats.stats;
                format!("chars: {}  words: {}  lines: {}", s.chars, s.words, s.lines)
            }
            Panel::Json => self.json.output.clone(),
            Panel::Encode => self.encode.output.clone(),
            Panel::Color => match (self.color.rgb, self.color.hsl) {
                (Some(rgb), Some(hsl)) => format!("{} {} {}", rgb.to_hex(), rgb, hsl),
                _ => String::new(),
            },
            Panel::Password => self.password.generated.clone(),
            Panel::Qr => self.qr.input.clone(),
            Panel::Calc => self.calc.calc.expression().to_string(),
            Panel::Units => self.units.result.clone().unwrap_or_default(),
            Panel::Help => String::new(),
        };
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }

    /// Copy the active panel's output to the system clipboard. Failures are
    /// non-fatal and land in a toast.
    pub fn copy_output(&mut self) {
        let Some(text) = self.output_text() else {
            self.overlays.warning("Nothing to copy");
            return;
        };
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => {
                self.overlays.success("Copied to clipboard");
            }
            Err(err) => {
                self.overlays.error(format!("Clipboard write failed: {err}"));
            }
        }
    }
}
