//! Everything the renderer reads each frame, and the input events that
//! mutate it.

use crate::config::RenderConfig;
use crate::pattern::{PatternSelector, TouchLevel};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point to the viewport rectangle.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}

/// Character grid covering the viewport; only its dimensions are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn from_viewport(viewport: Viewport, cell_width: f64, cell_height: f64) -> Self {
        Self {
            width: (viewport.width / cell_width).floor() as usize,
            height: (viewport.height / cell_height).floor() as usize,
        }
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

/// Monotonic animation time. Never wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    time: f64,
}

impl AnimationClock {
    pub fn at(time: f64) -> Self {
        Self { time }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance(&mut self, step: f64) {
        self.time += step;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Position in viewport pixels.
    pub x: f64,
    pub y: f64,
    pub touching: bool,
    pub level: TouchLevel,
    /// Use the large palette.
    pub shuffle: bool,
    /// Timestamp of the previous touch start, for double-tap detection.
    pub last_tap_ms: Option<f64>,
}

impl PointerState {
    pub fn centered(viewport: Viewport) -> Self {
        let (x, y) = viewport.center();
        Self {
            x,
            y,
            touching: false,
            level: TouchLevel::Idle,
            shuffle: false,
            last_tap_ms: None,
        }
    }
}

/// Input as delivered by the host, already reduced to plain numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    DoubleClick,
    TouchStart { timestamp_ms: f64 },
    /// `x`/`y` are the first contact's position.
    TouchMove { contacts: usize, x: f64, y: f64 },
    TouchEnd { remaining: usize },
    /// Tilt in degrees: `beta` front/back, `gamma` left/right.
    Orientation { beta: f64, gamma: f64 },
    Resize { width: f64, height: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub grid: Grid,
    pub clock: AnimationClock,
    pub pointer: PointerState,
    pub selector: PatternSelector,
}

impl RenderState {
    pub fn new(config: &RenderConfig, viewport: Viewport) -> Self {
        Self {
            viewport,
            grid: Grid::from_viewport(viewport, config.cell_width, config.cell_height),
            clock: AnimationClock::default(),
            pointer: PointerState::centered(viewport),
            selector: PatternSelector::new(config.patterns),
        }
    }

    /// Pointer position in grid cells.
    pub fn pointer_cell(&self, config: &RenderConfig) -> (f64, f64) {
        (
            (self.pointer.x / config.cell_width).floor(),
            (self.pointer.y / config.cell_height).floor(),
        )
    }

    pub fn apply(&mut self, config: &RenderConfig, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                if !self.pointer.touching {
                    self.pointer.x = x;
                    self.pointer.y = y;
                }
            }
            InputEvent::DoubleClick => {
                if !self.pointer.touching {
                    self.next_pattern();
                }
            }
            InputEvent::TouchStart { timestamp_ms } => {
                self.pointer.touching = true;
                if let Some(last) = self.pointer.last_tap_ms {
                    let gap = timestamp_ms - last;
                    if gap > 0.0 && gap < config.double_tap_ms {
                        self.next_pattern();
                    }
                }
                self.pointer.last_tap_ms = Some(timestamp_ms);
            }
            InputEvent::TouchMove { contacts, x, y } => {
                if contacts == 0 {
                    return;
                }
                self.pointer.x = x;
                self.pointer.y = y;
                self.set_level(TouchLevel::from_contacts(contacts));
            }
            InputEvent::TouchEnd { remaining } => {
                if remaining == 0 {
                    self.pointer.touching = false;
                    self.set_level(TouchLevel::Idle);
                }
            }
            InputEvent::Orientation { beta, gamma } => {
                if self.pointer.touching || !beta.is_finite() || !gamma.is_finite() {
                    return;
                }
                let x = (gamma + 90.0) / 180.0 * self.viewport.width;
                let y = (beta + 90.0) / 180.0 * self.viewport.height;
                let (x, y) = self.viewport.clamp(x, y);
                self.pointer.x = x;
                self.pointer.y = y;
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.grid = Grid::from_viewport(self.viewport, config.cell_width, config.cell_height);
                log::debug!(
                    "resized to {}x{} px, grid {}x{}",
                    self.viewport.width,
                    self.viewport.height,
                    self.grid.width,
                    self.grid.height
                );
            }
        }
    }

    fn next_pattern(&mut self) {
        let pattern = self.selector.advance();
        log::debug!("pattern -> {pattern} ({})", self.selector.index());
    }

    fn set_level(&mut self, level: TouchLevel) {
        if self.pointer.level != level {
            log::debug!("touch level {:?} -> {:?}", self.pointer.level, level);
        }
        self.pointer.level = level;
        self.pointer.shuffle = level == TouchLevel::Multi;
    }
}
