//! Widget configuration loaded from an attribute sheet.
//!
//! ```text
//! DashedProgressBar {
//!     dash_color: #00ffff
//!     dash_background_color: #888888
//!     max_dash_count: 5
//!     current_dash_count: 0
//!     animation_duration_ms: 300
//!     easing: accelerate_decelerate
//!     corner_compensation: 0.3333
//!     height: 8
//! }
//! ```

use std::time::Duration;

use dashbar_attrs::{Block, Prop, Sheet, Value};
use dashbar_engine::paint::Color;
use dashbar_engine::time::Easing;

use crate::error::ConfigError;
use crate::widgets::dashed_progress::{DEFAULT_CORNER_COMPENSATION, DEFAULT_DURATION, DEFAULT_HEIGHT};

/// Block name read by [`DashedProgressConfig::from_sheet`].
pub const WIDGET_BLOCK: &str = "DashedProgressBar";

const KNOWN_KEYS: &[&str] = &[
    "dash_color",
    "dash_background_color",
    "max_dash_count",
    "current_dash_count",
    "animation_duration_ms",
    "easing",
    "corner_compensation",
    "height",
];

/// Initial values for a [`DashedProgressBar`](crate::widgets::dashed_progress::DashedProgressBar).
#[derive(Debug, Clone, PartialEq)]
pub struct DashedProgressConfig {
    pub dash_color: Color,
    pub dash_background_color: Color,
    /// `0` means unset; the widget clamps it to 1.
    pub max_dash_count: i32,
    pub current_dash_count: i32,
    pub animation_duration: Duration,
    pub easing: Easing,
    pub corner_compensation: f32,
    pub height: f32,
}

impl Default for DashedProgressConfig {
    fn default() -> Self {
        Self {
            dash_color: Color::CYAN,
            dash_background_color: Color::GRAY,
            max_dash_count: 0,
            current_dash_count: 0,
            animation_duration: DEFAULT_DURATION,
            easing: Easing::AccelerateDecelerate,
            corner_compensation: DEFAULT_CORNER_COMPENSATION,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl DashedProgressConfig {
    /// Parses `src` and reads its [`WIDGET_BLOCK`] block.
    pub fn from_source(src: &str) -> Result<Self, ConfigError> {
        let sheet = dashbar_attrs::parse_str(src)?;
        Self::from_sheet(&sheet)
    }

    pub fn from_sheet(sheet: &Sheet) -> Result<Self, ConfigError> {
        let block = sheet
            .block(WIDGET_BLOCK)
            .ok_or_else(|| ConfigError::MissingBlock(WIDGET_BLOCK.to_string()))?;
        Self::from_block(block)
    }

    /// Reads every known key from `block`; missing keys keep their defaults.
    pub fn from_block(block: &Block) -> Result<Self, ConfigError> {
        for prop in &block.props {
            if !KNOWN_KEYS.contains(&prop.key.as_str()) {
                log::debug!("{}:{}: ignoring unknown attribute `{}`", prop.line, prop.col, prop.key);
            }
        }

        let mut cfg = Self::default();

        if let Some(p) = block.prop("dash_color") {
            cfg.dash_color = read_color(p)?;
        }
        if let Some(p) = block.prop("dash_background_color") {
            cfg.dash_background_color = read_color(p)?;
        }
        if let Some(p) = block.prop("max_dash_count") {
            cfg.max_dash_count = read_int(p)?;
        }
        if let Some(p) = block.prop("current_dash_count") {
            cfg.current_dash_count = read_int(p)?;
        }
        if let Some(p) = block.prop("animation_duration_ms") {
            cfg.animation_duration = Duration::from_millis(read_non_negative(p)? as u64);
        }
        if let Some(p) = block.prop("easing") {
            cfg.easing = read_easing(p)?;
        }
        if let Some(p) = block.prop("corner_compensation") {
            cfg.corner_compensation = read_non_negative(p)?;
        }
        if let Some(p) = block.prop("height") {
            let h = read_non_negative(p)?;
            if h == 0.0 {
                return Err(invalid(p, "a positive number"));
            }
            cfg.height = h;
        }

        log::debug!(
            "loaded {WIDGET_BLOCK}: {} of {} dashes, {:?} {:?}",
            cfg.current_dash_count,
            cfg.max_dash_count,
            cfg.animation_duration,
            cfg.easing
        );
        Ok(cfg)
    }

    /// Strict check for hosts that refuse to start with an unset dash count.
    ///
    /// The widget itself never needs this: it clamps instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dash_count < 1 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "max_dash_count must be at least 1, got {}",
                self.max_dash_count
            )));
        }
        Ok(())
    }
}

// ── readers ───────────────────────────────────────────────────────────────

fn describe(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("string \"{s}\""),
        Value::Number(n) => format!("number {n}"),
        Value::Color([r, g, b, a]) => format!("color #{r:02x}{g:02x}{b:02x}{a:02x}"),
        Value::Ident(s) => format!("identifier `{s}`"),
    }
}

fn invalid(prop: &Prop, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: prop.key.clone(),
        expected,
        found: describe(&prop.value),
        line: prop.line,
        col: prop.col,
    }
}

fn read_color(prop: &Prop) -> Result<Color, ConfigError> {
    match prop.value {
        Value::Color([r, g, b, a]) => Ok(Color::from_srgb_u8(r, g, b, a)),
        _ => Err(invalid(prop, "a color")),
    }
}

fn read_int(prop: &Prop) -> Result<i32, ConfigError> {
    match prop.value {
        Value::Number(n) if n.fract() == 0.0 && n.abs() <= i32::MAX as f32 => Ok(n as i32),
        _ => Err(invalid(prop, "an integer")),
    }
}

fn read_non_negative(prop: &Prop) -> Result<f32, ConfigError> {
    match prop.value {
        Value::Number(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(invalid(prop, "a non-negative number")),
    }
}

fn read_easing(prop: &Prop) -> Result<Easing, ConfigError> {
    const EXPECTED: &str = "linear, accelerate_decelerate or cubic_in_out";
    match &prop.value {
        Value::Ident(name) | Value::Str(name) => {
            Easing::from_name(name).ok_or_else(|| invalid(prop, EXPECTED))
        }
        _ => Err(invalid(prop, EXPECTED)),
    }
}
