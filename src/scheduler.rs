//! The single repeating frame task.
//!
//! Input handlers only [`push`](Scheduler::push) events; they are applied in
//! arrival order at the start of the next [`tick`](Scheduler::tick), so the
//! state a frame reads never changes mid-frame.

use std::collections::VecDeque;

use crate::config::RenderConfig;
use crate::field::{render_frame, GlyphSurface};
use crate::state::{InputEvent, RenderState, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub frame: u64,
    pub events_applied: usize,
    pub cells_painted: usize,
    pub time: f64,
}

pub struct Scheduler {
    config: RenderConfig,
    state: RenderState,
    pending: VecDeque<InputEvent>,
    frames: u64,
}

impl Scheduler {
    pub fn new(config: RenderConfig, viewport: Viewport) -> Self {
        let state = RenderState::new(&config, viewport);
        Self {
            config,
            state,
            pending: VecDeque::new(),
            frames: 0,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Apply queued input, advance the clock one step, paint a frame.
    pub fn tick<S: GlyphSurface>(&mut self, surface: &mut S) -> Result<TickReport, S::Error> {
        let events_applied = self.pending.len();
        while let Some(event) = self.pending.pop_front() {
            self.state.apply(&self.config, event);
        }

        self.state.clock.advance(self.config.time_step);
        let cells_painted = render_frame(&self.state, &self.config, surface)?;
        self.frames += 1;

        Ok(TickReport {
            frame: self.frames,
            events_applied,
            cells_painted,
            time: self.state.clock.time(),
        })
    }
}
