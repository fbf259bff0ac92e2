use std::time::{Duration, Instant};

/// Interval after an accepted transition during which further
/// transitions are rejected. Absorbs key-repeat and double-click
/// bursts without queueing them.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Single authority for "which section is visible".
///
/// The navigator owns the presentation position and nothing else: it
/// never touches content or the screen. Every mutation goes through
/// one guarded transition path, and every guard failure is a silent
/// boolean rejection rather than an error. Callers that need to react
/// to an accepted transition (load content, redraw, announce) branch
/// on the returned bool.
///
/// Sections are numbered 1 through `total`. `current == None` is the
/// front page, before `start` has been called.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Option<usize>,
    total: usize,
    started: bool,
    settle: Duration,
    settle_until: Option<Instant>,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self::with_settle(total, SETTLE_DELAY)
    }

    pub fn with_settle(total: usize, settle: Duration) -> Self {
        Self {
            current: None,
            total,
            started: false,
            settle,
            settle_until: None,
        }
    }

    /// Start the presentation and enter section 1.
    ///
    /// `started` flips to true exactly once; repeat calls are absorbed
    /// by the already-on-section guard inside [`Navigator::go_to_at`]
    /// and return false.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    pub fn start_at(&mut self, now: Instant) -> bool {
        self.started = true;
        self.go_to_at(1, now)
    }

    /// Request a transition to `target` (1-based).
    ///
    /// Returns false without any state change when the presentation
    /// has not started, `target` is outside `[1, total]`, `target` is
    /// the current section, or a previous transition is still
    /// settling. Returns true and arms the settle window otherwise.
    pub fn go_to(&mut self, target: usize) -> bool {
        self.go_to_at(target, Instant::now())
    }

    pub fn go_to_at(&mut self, target: usize, now: Instant) -> bool {
        if !self.started {
            return false;
        }
        if target < 1 || target > self.total {
            return false;
        }
        if self.current == Some(target) {
            return false;
        }
        if self.is_settling(now) {
            return false;
        }

        self.current = Some(target);
        self.settle_until = Some(now + self.settle);
        true
    }

    /// `go_to(current + 1)`; rejected at the last section by the range
    /// guard.
    pub fn next(&mut self) -> bool {
        self.next_at(Instant::now())
    }

    pub fn next_at(&mut self, now: Instant) -> bool {
        match self.current {
            Some(current) => self.go_to_at(current + 1, now),
            None => false,
        }
    }

    /// `go_to(current - 1)`; rejected at section 1 because the target
    /// underflows the valid range.
    pub fn prev(&mut self) -> bool {
        self.prev_at(Instant::now())
    }

    pub fn prev_at(&mut self, now: Instant) -> bool {
        match self.current {
            Some(current) => self.go_to_at(current.saturating_sub(1), now),
            None => false,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        self.settle_until.is_some_and(|until| now < until)
    }

    /// Progress through the deck as `current / total`, 0.0 on the
    /// front page.
    pub fn progress_ratio(&self) -> f64 {
        match self.current {
            Some(current) if self.total > 0 => current as f64 / self.total as f64,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_navigator(total: usize) -> (Navigator, Instant) {
        let mut nav = Navigator::new(total);
        let t0 = Instant::now();
        assert!(nav.start_at(t0));
        (nav, t0)
    }

    /// A point in time safely past the settle window armed at `t`.
    fn settled(t: Instant) -> Instant {
        t + SETTLE_DELAY + Duration::from_millis(1)
    }

    #[test]
    fn rejects_navigation_before_start() {
        let mut nav = Navigator::new(9);
        assert!(!nav.go_to(1));
        assert_eq!(nav.current(), None);
        assert!(!nav.started());
    }

    #[test]
    fn start_enters_section_one() {
        let (nav, _) = started_navigator(9);
        assert!(nav.started());
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn repeated_start_is_absorbed() {
        let (mut nav, t0) = started_navigator(9);
        assert!(!nav.start_at(settled(t0)));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn rejects_out_of_range_targets() {
        let (mut nav, t0) = started_navigator(9);
        let t1 = settled(t0);
        assert!(!nav.go_to_at(0, t1));
        assert!(!nav.go_to_at(10, t1));
        assert!(!nav.go_to_at(usize::MAX, t1));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn rejects_current_section() {
        let (mut nav, t0) = started_navigator(9);
        assert!(!nav.go_to_at(1, settled(t0)));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn rejects_during_settle_window() {
        let (mut nav, t0) = started_navigator(9);
        // Target is valid, but the transition armed by start_at has
        // not settled yet.
        assert!(!nav.go_to_at(3, t0 + Duration::from_millis(100)));
        assert_eq!(nav.current(), Some(1));

        // Same target is accepted once the window elapses.
        assert!(nav.go_to_at(3, settled(t0)));
        assert_eq!(nav.current(), Some(3));
    }

    #[test]
    fn boundary_next_and_prev_are_rejected() {
        let (mut nav, t0) = started_navigator(9);
        let t1 = settled(t0);
        assert!(!nav.prev_at(t1));
        assert_eq!(nav.current(), Some(1));

        assert!(nav.go_to_at(9, t1));
        assert!(!nav.next_at(settled(t1)));
        assert_eq!(nav.current(), Some(9));
    }

    #[test]
    fn next_and_prev_step_by_one() {
        let (mut nav, t0) = started_navigator(9);
        let t1 = settled(t0);
        assert!(nav.next_at(t1));
        assert_eq!(nav.current(), Some(2));

        let t2 = settled(t1);
        assert!(nav.prev_at(t2));
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn progress_ratio_is_exact() {
        let (mut nav, t0) = started_navigator(9);
        assert!((nav.progress_ratio() - 1.0 / 9.0).abs() < f64::EPSILON);

        assert!(nav.go_to_at(3, settled(t0)));
        assert!((nav.progress_ratio() - 3.0 / 9.0).abs() < f64::EPSILON);

        let mut fresh = Navigator::new(9);
        assert_eq!(fresh.progress_ratio(), 0.0);
        fresh.started = true;
        for target in 1..=9 {
            fresh.current = Some(target);
            assert!((fresh.progress_ratio() - target as f64 / 9.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn start_then_goto_five_twice() {
        let mut nav = Navigator::new(9);
        let t0 = Instant::now();

        let first = nav.start_at(t0);
        let t1 = settled(t0);
        let second = nav.go_to_at(5, t1);
        let third = nav.go_to_at(5, settled(t1));

        assert_eq!((first, second, third), (true, true, false));
        assert_eq!(nav.current(), Some(5));
    }

    #[test]
    fn zero_settle_allows_back_to_back_transitions() {
        let mut nav = Navigator::with_settle(9, Duration::ZERO);
        let t0 = Instant::now();
        assert!(nav.start_at(t0));
        assert!(nav.go_to_at(2, t0));
        assert!(nav.go_to_at(3, t0));
        assert_eq!(nav.current(), Some(3));
    }
}
