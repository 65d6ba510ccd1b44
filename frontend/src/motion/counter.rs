//! Count-up animation for the headline statistic.

pub const COUNTER_TARGET: u32 = 800;
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Linear count from 0 to `target` in fixed ticks.
///
/// The increment is `target / (duration / tick)` per tick regardless of how
/// late a tick fires. The running value is computed in integers from the
/// tick count, so tick `k` shows `min(target, ⌊k · target · tick / duration⌋)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    target: u32,
    duration_ms: u32,
    tick_ms: u32,
    ticks: u32,
    value: u32,
    done: bool,
    cancelled: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(COUNTER_TARGET, COUNTER_DURATION_MS, COUNTER_TICK_MS)
    }
}

impl CounterState {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(1),
            tick_ms: tick_ms.max(1),
            ticks: 0,
            value: 0,
            done: target == 0,
            cancelled: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stops the count where it is. Every later tick is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Advances one tick. `None` once the target has been reached or the
    /// count was cancelled, meaning there is nothing to write and the timer
    /// should stop.
    pub fn tick(&mut self) -> Option<u32> {
        if self.done || self.cancelled {
            return None;
        }
        self.ticks += 1;
        let reached = u64::from(self.ticks) * u64::from(self.target) * u64::from(self.tick_ms)
            / u64::from(self.duration_ms);
        if reached >= u64::from(self.target) {
            self.value = self.target;
            self.done = true;
        } else {
            self.value = reached as u32;
        }
        Some(self.value)
    }
}

/// What the statistics block renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterView {
    pub value: u32,
    pub done: bool,
    pub show_suffix: bool,
}

impl CounterView {
    pub fn of(counter: &CounterState) -> Self {
        Self {
            value: counter.value(),
            done: counter.is_done(),
            show_suffix: false,
        }
    }

    /// The suffix appears on the render after the count lands, never before.
    pub fn with_suffix(self) -> Option<Self> {
        if self.done && !self.show_suffix {
            Some(Self {
                show_suffix: true,
                ..self
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_follows_integer_schedule() {
        let mut counter = CounterState::default();
        for k in 1..=125u32 {
            let expected = (k * 64 / 10).min(COUNTER_TARGET);
            assert_eq!(counter.tick(), Some(expected), "tick {k}");
        }
        assert!(counter.is_done());
        assert_eq!(counter.value(), COUNTER_TARGET);
    }

    #[test]
    fn fifty_ticks_reach_320() {
        let mut counter = CounterState::default();
        for _ in 0..50 {
            counter.tick();
        }
        assert_eq!(counter.value(), 320);
        assert!(!counter.is_done());
    }

    #[test]
    fn stops_writing_after_target() {
        let mut counter = CounterState::default();
        while counter.tick().is_some() {}
        let settled = counter.clone();

        for _ in 0..10 {
            assert_eq!(counter.tick(), None);
        }
        assert_eq!(counter, settled);
    }

    #[test]
    fn cancelled_count_writes_nothing() {
        let mut counter = CounterState::default();
        for _ in 0..10 {
            counter.tick();
        }
        counter.cancel();
        let frozen = counter.clone();

        assert_eq!(counter.tick(), None);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter, frozen);
        assert_eq!(counter.value(), 64);
        assert!(counter.is_cancelled());
        assert!(!counter.is_done());
    }

    #[test]
    fn cancel_before_first_tick() {
        let mut counter = CounterState::default();
        counter.cancel();
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn uneven_increment_clamps_to_target() {
        let mut counter = CounterState::new(10, 100, 16);
        let values: Vec<u32> = std::iter::from_fn(|| counter.tick()).collect();
        assert_eq!(values, [1, 3, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn degenerate_settings_do_not_panic() {
        let mut zero = CounterState::new(0, 2_000, 16);
        assert!(zero.is_done());
        assert_eq!(zero.tick(), None);

        let mut instant = CounterState::new(5, 0, 0);
        assert_eq!(instant.tick(), Some(5));
        assert_eq!(instant.tick(), None);
    }

    #[test]
    fn suffix_only_after_done() {
        let mut counter = CounterState::default();
        counter.tick();
        assert_eq!(CounterView::of(&counter).with_suffix(), None);

        while counter.tick().is_some() {}
        let view = CounterView::of(&counter);
        assert!(!view.show_suffix);
        let shown = view.with_suffix().expect("suffix after landing");
        assert!(shown.show_suffix);
        assert_eq!(shown.value, COUNTER_TARGET);
        assert_eq!(shown.with_suffix(), None);
    }
}
