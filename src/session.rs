//! Event dispatch shell around the pure puzzle and layout modules.
//!
//! A `Session` owns the one mutable puzzle, the current layout, the dialogs
//! and the elapsed-time counter. Every event is applied synchronously in the
//! order it arrives; time is passed in by the caller so the shell never reads
//! the clock itself.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::images::ImageCatalog;
use crate::layout::{compute_layout, Layout};
use crate::puzzle::{ClickOutcome, PuzzleState};
use crate::render::RenderModel;
use crate::tile::TileId;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub images: ImageCatalog,
    /// Viewport size before the first resize notification.
    pub viewport: (f64, f64),
    /// Fixed seed for reproducible puzzles; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            images: ImageCatalog::default(),
            viewport: (800.0, 600.0),
            seed: None,
        }
    }
}

/// Modal surface currently covering the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    Rules,
    Congratulations,
}

/// Notifications for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Raised once per puzzle, on the click that completes it.
    Solved { elapsed_secs: u64 },
}

pub struct Session {
    puzzle: PuzzleState,
    layout: Layout,
    images: ImageCatalog,
    image_index: usize,
    dialog: Option<Dialog>,
    started_at: Option<Instant>,
    elapsed_secs: u64,
    solved_reported: bool,
    rng: StdRng,
}

impl Session {
    /// Starts the first puzzle with the rules dialog showing.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let image_index = config.images.next_index(None, &mut rng);
        let (width, height) = config.viewport;
        let layout = compute_layout(width, height);
        // every orientation has the same number of cells
        let puzzle = PuzzleState::new(layout.tile_count(), &mut rng);

        Self {
            puzzle,
            layout,
            images: config.images,
            image_index,
            dialog: Some(Dialog::Rules),
            started_at: None,
            elapsed_secs: 0,
            solved_reported: false,
            rng,
        }
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    pub fn image(&self) -> &str {
        self.images.get(self.image_index).unwrap_or_default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn render_model(&self) -> RenderModel {
        RenderModel::build(&self.puzzle, &self.layout)
    }

    fn timer_running(&self) -> bool {
        self.started_at.is_some() && self.dialog.is_none()
    }

    /// Closes the rules dialog and starts the clock.
    pub fn dismiss_rules(&mut self, now: Instant) {
        if self.dialog == Some(Dialog::Rules) {
            self.dialog = None;
            self.started_at.get_or_insert(now);
            debug!("rules dismissed, timer started");
        }
    }

    /// Recomputes the geometry; the puzzle itself is untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = compute_layout(width, height);
        debug!(
            width,
            height,
            tile_size = self.layout.tile_size,
            orientation = ?self.layout.orientation,
            "viewport resized"
        );
    }

    /// Refreshes the elapsed whole seconds while the clock runs.
    pub fn tick(&mut self, now: Instant) {
        if !self.timer_running() {
            return;
        }
        if let Some(started_at) = self.started_at {
            self.elapsed_secs = now.saturating_duration_since(started_at).as_secs();
            trace!(elapsed_secs = self.elapsed_secs, "tick");
        }
    }

    /// Forwards a click to the puzzle.
    ///
    /// Clicks are ignored while a dialog covers the board. Returns the solved
    /// notification on the click that completes the puzzle.
    pub fn click(&mut self, id: TileId, now: Instant) -> Option<SessionEvent> {
        if self.dialog.is_some() {
            debug!(%id, dialog = ?self.dialog, "click ignored behind dialog");
            return None;
        }

        if self.puzzle.on_tile_click(id) == ClickOutcome::Ignored {
            return None;
        }

        if self.solved_reported || !self.puzzle.is_solved() {
            return None;
        }

        self.tick(now);
        self.solved_reported = true;
        self.dialog = Some(Dialog::Congratulations);
        info!(
            elapsed = %self.formatted_elapsed(),
            image = self.image(),
            "puzzle solved"
        );
        Some(SessionEvent::Solved {
            elapsed_secs: self.elapsed_secs,
        })
    }

    /// Replaces the puzzle with a fresh one on a different picture.
    ///
    /// Closes the congratulations dialog; the clock restarts immediately
    /// unless the rules are still showing.
    pub fn next_puzzle(&mut self, now: Instant) {
        self.image_index = self.images.next_index(Some(self.image_index), &mut self.rng);
        self.puzzle = PuzzleState::new(self.layout.tile_count(), &mut self.rng);
        self.solved_reported = false;
        self.elapsed_secs = 0;

        if self.dialog == Some(Dialog::Rules) {
            self.started_at = None;
        } else {
            self.dialog = None;
            self.started_at = Some(now);
        }
        info!(image = self.image(), "next puzzle");
    }
}

/// Formats whole seconds as `m:ss`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
