//! Wave/depth generators.
//!
//! Every pattern is a pure function of a [`PatternInput`]; the selector only
//! decides which one runs.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Input mode derived from the number of active touch contacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchLevel {
    /// Mouse or no input.
    #[default]
    Idle,
    Single,
    Multi,
}

/// Speed and amplitude applied to the active pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub speed: f64,
    pub wave_intensity: f64,
}

impl TouchLevel {
    pub fn from_contacts(contacts: usize) -> Self {
        match contacts {
            0 => TouchLevel::Idle,
            1 => TouchLevel::Single,
            _ => TouchLevel::Multi,
        }
    }

    /// Numeric level (1, 2, 3) used to scale pointer influence.
    pub fn factor(self) -> f64 {
        match self {
            TouchLevel::Idle => 1.0,
            TouchLevel::Single => 2.0,
            TouchLevel::Multi => 3.0,
        }
    }

    pub fn motion(self) -> Motion {
        let (speed, wave_intensity) = match self {
            TouchLevel::Idle => (1.0, 0.3),
            TouchLevel::Single => (2.5, 0.5),
            TouchLevel::Multi => (4.0, 0.7),
        };
        Motion {
            speed,
            wave_intensity,
        }
    }
}

/// Everything a pattern may look at for one cell.
#[derive(Clone, Copy, Debug)]
pub struct PatternInput {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    /// Pointer offset in grid cells, pre-scaled by 0.02.
    pub dx: f64,
    pub dy: f64,
    pub grid_w: f64,
    pub grid_h: f64,
    pub motion: Motion,
}

impl PatternInput {
    fn center_offset(&self) -> (f64, f64) {
        (self.x - self.grid_w / 2.0, self.y - self.grid_h / 2.0)
    }

    fn center_distance(&self) -> f64 {
        let (cx, cy) = self.center_offset();
        (cx.powi(2) + cy.powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Diagonal sine flow, bent towards the pointer.
    Spiral,
    /// Concentric rings radiating from the grid centre.
    RadialBurst,
    /// Rotational flow around the grid centre.
    Vortex,
    /// A bar filling the grid left to right.
    HorizontalFillBar,
    /// Bright rows rolling downwards.
    Scanlines,
    /// 8x4-cell blocks lighting up one after another.
    BlockProgression,
    /// A disc growing out of the centre until it covers the grid.
    PulseFill,
}

impl Pattern {
    /// Returns `(wave, depth)` for one cell.
    pub fn eval(self, p: &PatternInput) -> (f64, f64) {
        let speed = p.motion.speed;
        let wi = p.motion.wave_intensity;
        let t = p.time;

        match self {
            Pattern::Spiral => {
                let wave = ((p.x + t * 0.5 * speed + p.dx * 10.0) * 0.1).sin() * wi + 0.3;
                let depth = ((p.y - t * 0.3 * speed + p.dy * 10.0) * 0.15).sin() * (wi + 0.1) + 0.4;
                (wave, depth)
            }
            Pattern::RadialBurst => {
                let r = p.center_distance();
                let wave = (r * 0.05 + t * 0.6 * speed).sin() * wi + 0.3;
                let depth = ((r - t * 0.4 * speed) * 0.08).cos() * (wi + 0.1) + 0.4;
                (wave, depth)
            }
            Pattern::Vortex => {
                let (cx, cy) = p.center_offset();
                let angle = cy.atan2(cx);
                let r = p.center_distance();
                let wave = (angle * 4.0 + t * 0.7 * speed + r * 0.02).sin() * wi + 0.3;
                let depth = (angle * 3.0 - t * 0.5 * speed).cos() * (wi + 0.1) + 0.4;
                (wave, depth)
            }
            Pattern::HorizontalFillBar => {
                let progress = (t * 0.05 * speed).rem_euclid(1.0);
                let edge = progress * p.grid_w;
                let filled = p.x < edge;
                let wave = if filled {
                    wi + 0.3
                } else {
                    ((p.x - edge) * 0.3).sin() * wi * 0.3
                };
                let band = (p.y - p.grid_h / 2.0).abs() / (p.grid_h / 2.0).max(1.0);
                let depth = (band * PI * 0.5).cos() * (wi + 0.1) + if filled { 0.4 } else { 0.0 };
                (wave, depth)
            }
            Pattern::Scanlines => {
                let wave = (p.y * 0.8 - t * 2.0 * speed).sin() * wi + 0.3;
                let row = (p.y + t * 10.0 * speed).rem_euclid(4.0);
                let depth = if row < 1.0 { wi + 0.5 } else { 0.1 };
                (wave, depth)
            }
            Pattern::BlockProgression => {
                let cols = (p.grid_w / 8.0).ceil().max(1.0);
                let rows = (p.grid_h / 4.0).ceil().max(1.0);
                let block = (p.y / 4.0).floor() * cols + (p.x / 8.0).floor();
                let lit = (t * 2.0 * speed).floor().rem_euclid(cols * rows);
                let wave = if block <= lit {
                    wi + 0.3
                } else {
                    (block * 0.7 + t * speed).sin() * wi * 0.2
                };
                let depth = if block == lit {
                    (t * 6.0 * speed).sin() * (wi + 0.1) + 0.6
                } else if block < lit {
                    0.4
                } else {
                    0.0
                };
                (wave, depth)
            }
            Pattern::PulseFill => {
                let max_r = (p.grid_w.powi(2) + p.grid_h.powi(2)).sqrt() / 2.0;
                let r = p.center_distance() / max_r.max(1.0);
                let pulse = (t * 0.5 * speed).rem_euclid(1.0);
                let wave = if r < pulse {
                    wi + 0.3
                } else {
                    ((r - pulse) * PI * 6.0).sin() * wi * 0.3
                };
                let depth = (r * PI * 4.0 - t * speed).cos() * (wi + 0.1) + 0.4;
                (wave, depth)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Spiral => "spiral",
            Pattern::RadialBurst => "radial-burst",
            Pattern::Vortex => "vortex",
            Pattern::HorizontalFillBar => "horizontal-fill-bar",
            Pattern::Scanlines => "scanlines",
            Pattern::BlockProgression => "block-progression",
            Pattern::PulseFill => "pulse-fill",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which patterns the double-click/double-tap gesture cycles through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternSet {
    #[default]
    Classic,
    Progress,
}

const CLASSIC: [Pattern; 3] = [Pattern::Spiral, Pattern::RadialBurst, Pattern::Vortex];
const PROGRESS: [Pattern; 5] = [
    Pattern::HorizontalFillBar,
    Pattern::Scanlines,
    Pattern::BlockProgression,
    Pattern::PulseFill,
    Pattern::Vortex,
];

impl PatternSet {
    pub fn patterns(self) -> &'static [Pattern] {
        match self {
            PatternSet::Classic => &CLASSIC,
            PatternSet::Progress => &PROGRESS,
        }
    }
}

impl FromStr for PatternSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(PatternSet::Classic),
            "progress" => Ok(PatternSet::Progress),
            _ => Err(ConfigError::UnknownPatternSet(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternSelector {
    set: PatternSet,
    index: usize,
}

impl PatternSelector {
    pub fn new(set: PatternSet) -> Self {
        Self { set, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.set.patterns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> Pattern {
        self.set.patterns()[self.index]
    }

    /// Step to the next pattern, wrapping at the end of the set.
    pub fn advance(&mut self) -> Pattern {
        self.index = (self.index + 1) % self.len();
        self.current()
    }
}
