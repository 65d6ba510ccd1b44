//! Scroll progress engine for the floating header.
//!
//! The scroll offset is turned into a target in `[0, 1]` (linear fraction of
//! [`SCROLL_DISTANCE_PX`], then smoothstep), and the rendered value chases
//! that target one animation frame at a time with exponential damping.

/// Scroll distance over which the header fully morphs.
pub const SCROLL_DISTANCE_PX: f64 = 220.0;
/// Fraction of the remaining distance covered on each frame.
pub const DAMPING: f64 = 0.2;
/// Below this gap the damped value snaps onto its target.
pub const SETTLE_EPSILON: f64 = 0.001;

/// Linear fraction of the morph distance scrolled, clamped to `[0, 1]`.
///
/// Negative offsets (overscroll bounce) and NaN read as the top of the page.
pub fn raw_fraction(scroll_y: f64) -> f64 {
    if scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / SCROLL_DISTANCE_PX).clamp(0.0, 1.0)
}

/// Cubic Hermite smoothstep, `x²(3 − 2x)`. Zero slope at both ends.
pub fn smoothstep(x: f64) -> f64 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    x * x * (3.0 - 2.0 * x)
}

pub fn eased_progress(scroll_y: f64) -> f64 {
    smoothstep(raw_fraction(scroll_y))
}

/// What the frame loop should do after one damping step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// New value to commit to the view, if it moved far enough to matter.
    pub render: Option<f64>,
    /// Whether another animation frame is needed.
    pub reschedule: bool,
}

impl FrameStep {
    const IDLE: FrameStep = FrameStep {
        render: None,
        reschedule: false,
    };
}

/// Live target plus the damped value chasing it.
///
/// `in_flight` is the sentinel guarding the frame loop: at most one frame is
/// ever pending, and scroll events arriving meanwhile only overwrite `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgressState {
    target: f64,
    current: f64,
    rendered: f64,
    in_flight: bool,
    live: bool,
}

impl Default for ScrollProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollProgressState {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            rendered: 0.0,
            in_flight: false,
            live: true,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Records the latest scroll offset.
    ///
    /// Returns `true` when the caller has to request an animation frame. A
    /// frame already pending picks the new target up, so nothing is queued.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if !self.live {
            return false;
        }
        self.target = eased_progress(scroll_y);
        if self.in_flight || self.current == self.target {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Runs one damping step. Called from the animation frame callback.
    pub fn advance(&mut self) -> FrameStep {
        if !self.live || !self.in_flight {
            return FrameStep::IDLE;
        }

        let next = self.current + (self.target - self.current) * DAMPING;
        let settled = (self.target - next).abs() < SETTLE_EPSILON;
        self.current = if settled { self.target } else { next };
        self.in_flight = !settled;

        let moved = (self.current - self.rendered).abs() >= SETTLE_EPSILON;
        let landed = settled && self.current != self.rendered;
        let render = if moved || landed {
            self.rendered = self.current;
            Some(self.current)
        } else {
            None
        };

        FrameStep {
            render,
            reschedule: !settled,
        }
    }

    /// The frame could not be requested; let the next scroll event retry.
    pub fn abandon_frame(&mut self) {
        self.in_flight = false;
    }

    /// Stops the engine for good. Later scroll events and stray frames are
    /// ignored.
    pub fn teardown(&mut self) {
        self.live = false;
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(state: &mut ScrollProgressState) -> usize {
        let mut frames = 0;
        loop {
            frames += 1;
            if !state.advance().reschedule {
                return frames;
            }
            assert!(frames < 1_000, "damping never settled");
        }
    }

    #[test]
    fn raw_fraction_stays_in_unit_range() {
        for y in [-500.0, -1.0, 0.0, 1.0, 110.0, 219.9, 220.0, 221.0, 1.0e9, f64::INFINITY] {
            let raw = raw_fraction(y);
            assert!((0.0..=1.0).contains(&raw), "raw_fraction({y}) = {raw}");
        }
        assert_eq!(raw_fraction(f64::NAN), 0.0);
        assert_eq!(raw_fraction(f64::NEG_INFINITY), 0.0);
        assert_eq!(raw_fraction(110.0), 0.5);
    }

    #[test]
    fn smoothstep_endpoints_and_monotonic() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);

        let mut previous = smoothstep(0.0);
        for step in 1..=1000 {
            let eased = smoothstep(step as f64 / 1000.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn eased_progress_clamps_out_of_range_offsets() {
        assert_eq!(eased_progress(-40.0), 0.0);
        assert_eq!(eased_progress(10_000.0), 1.0);
    }

    #[test]
    fn damping_settles_after_31_frames_and_snaps_exactly() {
        let mut state = ScrollProgressState::new();
        assert!(state.on_scroll(SCROLL_DISTANCE_PX));
        assert_eq!(state.target(), 1.0);

        let frames = run_to_rest(&mut state);
        assert_eq!(frames, 31);
        assert_eq!(state.current(), 1.0);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn damping_never_overshoots() {
        let mut state = ScrollProgressState::new();
        state.on_scroll(500.0);
        let mut last = 0.0;
        while state.is_in_flight() {
            state.advance();
            assert!(state.current() >= last);
            assert!(state.current() <= 1.0);
            last = state.current();
        }
    }

    #[test]
    fn only_one_frame_is_requested_while_in_flight() {
        let mut state = ScrollProgressState::new();
        assert!(state.on_scroll(50.0));
        assert!(!state.on_scroll(80.0));
        assert!(!state.on_scroll(300.0));

        // The pending frame chases the latest target; intermediate ones are dropped.
        assert_eq!(state.target(), 1.0);
        run_to_rest(&mut state);
        assert_eq!(state.current(), 1.0);
    }

    #[test]
    fn no_frame_needed_when_already_at_target() {
        let mut state = ScrollProgressState::new();
        assert!(!state.on_scroll(0.0));
        assert!(!state.on_scroll(-25.0));
    }

    #[test]
    fn renders_are_skipped_for_sub_epsilon_moves() {
        let mut state = ScrollProgressState::new();
        state.on_scroll(220.0);
        let mut commits = Vec::new();
        while state.is_in_flight() {
            if let Some(value) = state.advance().render {
                commits.push(value);
            }
        }
        assert_eq!(commits.last().copied(), Some(1.0));
        for pair in commits.windows(2) {
            assert!(pair[1] - pair[0] >= SETTLE_EPSILON || pair[1] == 1.0);
        }
    }

    #[test]
    fn teardown_stops_all_updates() {
        let mut state = ScrollProgressState::new();
        state.on_scroll(220.0);
        state.advance();
        let frozen = state.current();

        state.teardown();
        assert!(!state.on_scroll(0.0));
        assert_eq!(state.advance(), FrameStep::IDLE);
        assert_eq!(state.current(), frozen);
    }

    #[test]
    fn abandoned_frame_can_be_requested_again() {
        let mut state = ScrollProgressState::new();
        assert!(state.on_scroll(100.0));
        state.abandon_frame();
        assert!(state.on_scroll(120.0));
    }
}
