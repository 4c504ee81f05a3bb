//! Renderer configuration.
//!
//! Defaults reproduce the shipped page. The host page may override a handful
//! of values through `data-*` attributes on the canvas element, e.g.
//! `<canvas id="canvas" data-patterns="progress" data-alpha-scale="0.7">`.

use thiserror::Error;

use crate::pattern::PatternSet;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("attribute `{attr}`: `{value}` is not a number")]
    NotANumber { attr: &'static str, value: String },
    #[error("attribute `{attr}`: {value} must be finite and greater than zero")]
    NotPositive { attr: &'static str, value: f64 },
    #[error("unknown pattern set `{0}` (expected `classic` or `progress`)")]
    UnknownPatternSet(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Cell size in CSS pixels.
    pub cell_width: f64,
    pub cell_height: f64,
    /// Clock advance per frame.
    pub time_step: f64,
    /// Final multiplier applied to glyph opacity.
    pub alpha_scale: f64,
    /// Pointer influence drops by this much per grid cell of distance.
    pub influence_falloff: f64,
    /// Two touch starts closer than this (ms) count as a double tap.
    pub double_tap_ms: f64,
    pub font: String,
    pub letter_spacing: String,
    pub patterns: PatternSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
            time_step: 0.016,
            alpha_scale: 0.68,
            influence_falloff: 0.05,
            double_tap_ms: 300.0,
            font: "bold 14px Courier New".to_string(),
            letter_spacing: "2px".to_string(),
            patterns: PatternSet::Classic,
        }
    }
}

impl RenderConfig {
    /// Build a config from defaults plus whatever `lookup` returns for the
    /// supported `data-*` attribute names.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(name) = lookup("data-patterns") {
            cfg.patterns = name.parse()?;
        }
        if let Some(v) = positive(&lookup, "data-time-step")? {
            cfg.time_step = v;
        }
        if let Some(v) = positive(&lookup, "data-alpha-scale")? {
            cfg.alpha_scale = v;
        }
        if let Some(v) = positive(&lookup, "data-cell-width")? {
            cfg.cell_width = v;
        }
        if let Some(v) = positive(&lookup, "data-cell-height")? {
            cfg.cell_height = v;
        }
        Ok(cfg)
    }
}

fn positive<F>(lookup: &F, attr: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(attr) else {
        return Ok(None);
    };
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        attr,
        value: raw.clone(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { attr, value });
    }
    Ok(Some(value))
}
