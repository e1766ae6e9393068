#![forbid(unsafe_code)]

//! The dial controller: owns the counter, the loaded episodes, and the swipe
//! tracker, and pushes label/content updates to a [`DialView`] after every
//! transition.
//!
//! The controller is host-driven. The page feeds it [`DialInput`] values from
//! DOM listeners and hands it the [`LoadOutcome`] once loading finishes; it
//! never blocks and never touches the DOM directly.

use crate::config::DialConfig;
use crate::dial::{DialState, RebindPolicy, Step, render_label};
use crate::episodes::EpisodeList;
use crate::error::CueError;
use crate::gesture::SwipeTracker;
use crate::loader::LoadOutcome;
use crate::logging::{debug, info, trace};

/// Render target for the dial.
///
/// Both methods overwrite their target; calling either twice with the same
/// argument leaves the same visible text.
pub trait DialView {
    /// Write the numeric readout.
    fn set_label(&mut self, label: &str);
    /// Write the HTML for the current episode.
    fn set_content(&mut self, html: &str);
}

/// Short audio feedback fired after a transition.
pub trait CueSink {
    fn play(&mut self) -> Result<(), CueError>;
}

/// Cue sink that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCue;

impl CueSink for NoCue {
    fn play(&mut self) -> Result<(), CueError> {
        Ok(())
    }
}

/// Normalized dial input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialInput {
    /// Click or tap on the dial surface.
    Activate,
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

pub struct DialController<V: DialView, C: CueSink = NoCue> {
    state: DialState,
    episodes: EpisodeList,
    swipe: SwipeTracker,
    placeholder: String,
    rebind: RebindPolicy,
    cue_enabled: bool,
    loaded: bool,
    view: V,
    cue: C,
}

impl<V: DialView> DialController<V, NoCue> {
    /// Controller without an audio cue.
    #[must_use]
    pub fn new(config: &DialConfig, view: V) -> Self {
        Self::with_cue(config, view, NoCue)
    }
}

impl<V: DialView, C: CueSink> DialController<V, C> {
    #[must_use]
    pub fn with_cue(config: &DialConfig, view: V, cue: C) -> Self {
        Self {
            state: DialState::new(config.default_max_index),
            episodes: EpisodeList::default(),
            swipe: SwipeTracker::new(config.swipe_threshold),
            placeholder: config.placeholder.clone(),
            rebind: config.rebind,
            cue_enabled: config.cue_enabled,
            loaded: false,
            view,
            cue,
        }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.state.current()
    }

    #[must_use]
    pub const fn max_index(&self) -> u32 {
        self.state.max_index()
    }

    #[must_use]
    pub const fn state(&self) -> &DialState {
        &self.state
    }

    #[must_use]
    pub fn episodes(&self) -> &EpisodeList {
        &self.episodes
    }

    /// Whether a load outcome has been applied.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Process one input. Returns the new position if a transition happened.
    pub fn handle(&mut self, input: DialInput) -> Option<u32> {
        match input {
            DialInput::Activate => Some(self.increment()),
            DialInput::TouchStart { x, y } => {
                self.swipe.start(x, y);
                None
            }
            DialInput::TouchMove { x, y } => {
                let step = self.swipe.move_to(x, y)?;
                Some(self.step(step))
            }
            DialInput::TouchEnd => {
                self.swipe.end();
                None
            }
        }
    }

    /// Advance by one with wraparound, then re-render.
    pub fn increment(&mut self) -> u32 {
        self.step(Step::Forward)
    }

    /// Move one position in either direction, then re-render.
    pub fn step(&mut self, step: Step) -> u32 {
        let current = self.state.apply(step);
        trace!(current, ?step, "dial transition");
        self.render();
        self.play_cue();
        current
    }

    /// Install the loader result and re-render.
    ///
    /// A loaded, non-empty list replaces the bound with `len - 1`. A degraded
    /// outcome leaves the default bound in place.
    pub fn apply_outcome(&mut self, outcome: &LoadOutcome) {
        self.loaded = true;
        if let Some(episodes) = outcome.episodes() {
            self.episodes = episodes.clone();
            if let Some(max_index) = episodes.max_index() {
                let before = self.state.current();
                let after = self.state.rebind(max_index, self.rebind);
                if before != after {
                    debug!(before, after, max_index, "dial position clamped to loaded bound");
                }
                info!(max_index, "dial bound updated");
            }
        }
        self.render();
    }

    /// Re-render both the label and the content.
    pub fn render(&mut self) {
        self.update_label();
        self.update_content();
    }

    pub fn update_label(&mut self) {
        let label = render_label(self.state.current());
        self.view.set_label(&label);
    }

    pub fn update_content(&mut self) {
        let html = self
            .episodes
            .content_at(self.state.current(), &self.placeholder);
        self.view.set_content(html);
    }

    fn play_cue(&mut self) {
        if !self.cue_enabled {
            return;
        }
        if let Err(_err) = self.cue.play() {
            debug!(error = %_err, "dial cue swallowed");
        }
    }
}
