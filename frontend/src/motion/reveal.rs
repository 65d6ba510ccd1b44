//! One-shot reveal triggers for the scroll-in sections.

/// Spacing of the ratios at which the observer reports.
pub const THRESHOLD_STEP: f64 = 0.05;

/// Sections of the page that animate in once they scroll into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Headline statistics; also starts the counter.
    ProblemStats,
    ProblemBoxes,
    Features,
    Team,
}

impl Region {
    /// Fraction of the region that has to be visible before it fires.
    pub fn threshold(self) -> f64 {
        match self {
            Region::ProblemStats => 0.5,
            Region::ProblemBoxes | Region::Features | Region::Team => 0.2,
        }
    }

    /// Visibility ratios the observer should report at: every
    /// [`THRESHOLD_STEP`] up to and including the region's threshold. A region
    /// taller than its viewport never reaches a high ratio, so the lower
    /// steps are what let [`VisibilityEntry::root_coverage`] be checked as it
    /// scrolls in.
    pub fn observer_thresholds(self) -> Vec<f64> {
        let threshold = self.threshold();
        let steps = (threshold / THRESHOLD_STEP).round() as usize;
        let mut out: Vec<f64> = (0..steps).map(|i| i as f64 * THRESHOLD_STEP).collect();
        out.push(threshold);
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::ProblemStats => "problem-stats",
            Region::ProblemBoxes => "problem-boxes",
            Region::Features => "features",
            Region::Team => "team",
        }
    }
}

/// One visibility notification for an observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub is_intersecting: bool,
    /// Visible share of the region.
    pub ratio: f64,
    /// Share of the viewport height the visible part covers.
    pub root_coverage: f64,
}

impl VisibilityEntry {
    /// Enough of the region is visible, or it already fills that much of
    /// the viewport.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && (self.ratio >= threshold || self.root_coverage >= threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    #[default]
    Armed,
    Fired,
}

impl RevealTrigger {
    /// Returns `true` only on the transition from `Armed` to `Fired`.
    pub fn observe(&mut self, entry: VisibilityEntry, threshold: f64) -> bool {
        match self {
            RevealTrigger::Armed if entry.qualifies(threshold) => {
                *self = RevealTrigger::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(self) -> bool {
        self == RevealTrigger::Fired
    }
}

/// A subscription that can be released.
pub trait ObservationHandle {
    fn disconnect(&mut self);
}

/// A trigger bound to its live observation.
///
/// The handle is held while armed and released on the first qualifying
/// entry or on [`RevealWatch::dispose`], whichever comes first. Entries
/// delivered after that are ignored.
#[derive(Debug)]
pub struct RevealWatch<H: ObservationHandle> {
    region: Region,
    trigger: RevealTrigger,
    handle: Option<H>,
}

impl<H: ObservationHandle> RevealWatch<H> {
    pub fn new(region: Region, handle: H) -> Self {
        Self {
            region,
            trigger: RevealTrigger::Armed,
            handle: Some(handle),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn is_fired(&self) -> bool {
        self.trigger.is_fired()
    }

    pub fn is_subscribed(&self) -> bool {
        self.handle.is_some()
    }

    /// Feeds a batch of entries. Returns `true` if this batch fired the trigger.
    pub fn on_entries<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = VisibilityEntry>,
    {
        if self.handle.is_none() {
            return false;
        }
        let threshold = self.region.threshold();
        for entry in entries {
            if self.trigger.observe(entry, threshold) {
                self.release();
                return true;
            }
        }
        false
    }

    pub fn dispose(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

impl<H: ObservationHandle> Drop for RevealWatch<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    struct CountingHandle {
        disconnects: Rc<Cell<u32>>,
    }

    impl ObservationHandle for CountingHandle {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn seen(ratio: f64) -> VisibilityEntry {
        VisibilityEntry {
            is_intersecting: ratio > 0.0,
            ratio,
            root_coverage: 0.0,
        }
    }

    /// A region `height` px tall with `visible` px inside a `viewport` px root.
    fn scrolled(height: f64, visible: f64, viewport: f64) -> VisibilityEntry {
        VisibilityEntry {
            is_intersecting: visible > 0.0,
            ratio: visible / height,
            root_coverage: visible / viewport,
        }
    }

    #[test]
    fn thresholds_per_region() {
        assert_eq!(Region::ProblemStats.threshold(), 0.5);
        assert_eq!(Region::ProblemBoxes.threshold(), 0.2);
        assert_eq!(Region::Features.threshold(), 0.2);
        assert_eq!(Region::Team.threshold(), 0.2);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.observe(seen(0.49), 0.5));
        assert!(trigger.observe(seen(0.5), 0.5));
    }

    #[test]
    fn non_intersecting_entry_never_qualifies() {
        let entry = VisibilityEntry {
            is_intersecting: false,
            ratio: 1.0,
            root_coverage: 1.0,
        };
        assert!(!entry.qualifies(0.2));
    }

    #[test]
    fn region_taller_than_two_viewports_still_fires() {
        let (height, viewport) = (1650.0, 700.0);
        let mut watch = RevealWatch::new(Region::ProblemStats, CountingHandle::default());

        // Report only at the observer's ratio steps, as the browser would.
        let mut fired_at = None;
        let mut previous = 0.0;
        for visible in (0..=700).step_by(10).map(f64::from) {
            let entry = scrolled(height, visible, viewport);
            let crossed = Region::ProblemStats
                .observer_thresholds()
                .into_iter()
                .any(|t| previous < t && entry.ratio >= t);
            previous = entry.ratio;
            if crossed && watch.on_entries([entry]) {
                fired_at = Some(visible);
                break;
            }
        }

        let visible = fired_at.expect("tall region fires");
        assert!(visible / height < 0.5);
        assert!(visible >= 0.5 * viewport);
        assert!(watch.is_fired());
    }

    #[test]
    fn root_coverage_alone_does_not_fire_off_screen() {
        let entry = VisibilityEntry {
            is_intersecting: false,
            ratio: 0.0,
            root_coverage: 0.9,
        };
        assert!(!entry.qualifies(0.2));
    }

    #[test]
    fn observer_thresholds_climb_to_the_region_threshold() {
        let stats = Region::ProblemStats.observer_thresholds();
        assert_eq!(stats.len(), 11);
        assert_eq!(stats.first(), Some(&0.0));
        assert_eq!(stats.last(), Some(&0.5));
        assert!(stats.windows(2).all(|w| w[0] < w[1]));

        let team = Region::Team.observer_thresholds();
        assert_eq!(team.len(), 5);
        assert_eq!(team.last(), Some(&0.2));
    }

    #[test]
    fn fires_once_and_stays_fired() {
        let handle = CountingHandle::default();
        let disconnects = handle.disconnects.clone();
        let mut watch = RevealWatch::new(Region::Features, handle);

        assert!(!watch.on_entries([seen(0.0), seen(0.1)]));
        assert!(!watch.is_fired());

        assert!(watch.on_entries([seen(0.25)]));
        assert!(watch.is_fired());
        assert!(!watch.is_subscribed());
        assert_eq!(disconnects.get(), 1);

        for ratio in [0.0, 0.9, 0.0, 0.3, 1.0] {
            assert!(!watch.on_entries([seen(ratio)]));
            assert!(watch.is_fired());
        }
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn first_qualifying_entry_in_a_batch_wins() {
        let mut watch = RevealWatch::new(Region::ProblemStats, CountingHandle::default());
        assert!(watch.on_entries([seen(0.3), seen(0.6), seen(0.0)]));
        assert!(watch.is_fired());
    }

    #[test]
    fn disposed_watch_ignores_entries() {
        let handle = CountingHandle::default();
        let disconnects = handle.disconnects.clone();
        let mut watch = RevealWatch::new(Region::Team, handle);

        watch.dispose();
        assert_eq!(disconnects.get(), 1);
        assert!(!watch.on_entries([seen(1.0)]));
        assert!(!watch.is_fired());

        watch.dispose();
        drop(watch);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn dropping_an_armed_watch_disconnects() {
        let handle = CountingHandle::default();
        let disconnects = handle.disconnects.clone();
        drop(RevealWatch::new(Region::ProblemBoxes, handle));
        assert_eq!(disconnects.get(), 1);
    }
}
