//! Slide rotation state for tiles.
//!
//! A tile shows one slide at a time and advances to the next one on a fixed
//! period unless the user pins it. Manual navigation (prev/next) works in
//! both states and never touches the rotation schedule.

/// Default rotation period in seconds.
pub const ROTATION_PERIOD_SECS: u32 = 15;

/// Rotation state machine for an ordered sequence of slides.
///
/// The owner calls [`tick`](Self::tick) once per second. With more than one
/// slide and no pin, the current index advances by one (mod length) every
/// `period` ticks. An empty sequence is a valid state: [`current`](Self::current)
/// returns `None` and every mutation is a no-op.
#[derive(Debug, Clone)]
pub struct SlideRotation<T> {
    items: Vec<T>,
    current: usize,
    pinned: bool,
    period: u32,
    /// Seconds until the next automatic advance.
    remaining: u32,
}

impl<T> SlideRotation<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_period(items, ROTATION_PERIOD_SECS)
    }

    pub fn with_period(items: Vec<T>, period: u32) -> Self {
        let period = period.max(1);
        Self {
            items,
            current: 0,
            pinned: false,
            period,
            remaining: period,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Current index, reduced modulo the sequence length.
    ///
    /// The stored index is never used to index directly; reducing on every
    /// access keeps it valid even after the sequence shrinks.
    pub fn index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.current % self.items.len()
        }
    }

    /// Current slide, or `None` when the sequence is empty.
    pub fn current(&self) -> Option<&T> {
        if self.items.is_empty() {
            None
        } else {
            self.items.get(self.index())
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// One second of elapsed time. Returns `true` if the slide advanced.
    ///
    /// Pinned or single-slide rotations never advance; their schedule is
    /// effectively unarmed.
    pub fn tick(&mut self) -> bool {
        if self.pinned || self.items.len() <= 1 {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.current = (self.index() + 1) % self.items.len();
            self.remaining = self.period;
            true
        } else {
            false
        }
    }

    /// Manual advance to the next slide. Does not touch the schedule.
    pub fn next(&mut self) {
        if self.items.len() > 1 {
            self.current = (self.index() + 1) % self.items.len();
        }
    }

    /// Manual step back to the previous slide. Does not touch the schedule.
    pub fn prev(&mut self) {
        let len = self.items.len();
        if len > 1 {
            self.current = (self.index() + len - 1) % len;
        }
    }

    /// Freezes automatic rotation. Manual navigation stays available.
    pub fn pin(&mut self) {
        self.pinned = true;
    }

    /// Resumes rotation with a fresh full period; time elapsed before the
    /// pin does not carry over.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.remaining = self.period;
    }

    pub fn toggle_pin(&mut self) {
        if self.pinned {
            self.unpin();
        } else {
            self.pin();
        }
    }

    /// Replaces the slide sequence. The index is kept (reduced modulo the
    /// new length on access) and the schedule re-arms to a full period.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.remaining = self.period;
    }
}

impl<T> Default for SlideRotation<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(n: usize) -> SlideRotation<usize> {
        SlideRotation::new((0..n).collect())
    }

    /// Runs `secs` seconds of ticks.
    fn run(r: &mut SlideRotation<usize>, secs: u32) {
        for _ in 0..secs {
            r.tick();
        }
    }

    #[test]
    fn empty_sequence_is_a_valid_state() {
        let mut r = rotation(0);
        assert_eq!(r.current(), None);
        r.next();
        r.prev();
        run(&mut r, 100);
        assert_eq!(r.current(), None);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn single_slide_never_rotates() {
        let mut r = rotation(1);
        run(&mut r, 60);
        assert_eq!(r.current(), Some(&0));
        r.next();
        r.prev();
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn advances_once_per_period() {
        let mut r = rotation(3);
        assert_eq!(r.current(), Some(&0));
        run(&mut r, 14);
        assert_eq!(r.index(), 0);
        run(&mut r, 1);
        assert_eq!(r.current(), Some(&1));
        // k full periods land on k mod n
        run(&mut r, 15 * 4);
        assert_eq!(r.index(), (1 + 4) % 3);
    }

    #[test]
    fn pin_freezes_and_unpin_rearms_full_period() {
        let mut r = rotation(3);
        run(&mut r, 10);
        r.pin();
        run(&mut r, 100);
        assert_eq!(r.index(), 0);
        r.unpin();
        // No carry-over from the 10 seconds before the pin.
        run(&mut r, 14);
        assert_eq!(r.index(), 0);
        run(&mut r, 1);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn manual_navigation_while_pinned_does_not_resume() {
        let mut r = rotation(3);
        r.pin();
        r.next();
        assert_eq!(r.index(), 1);
        r.prev();
        r.prev();
        assert_eq!(r.index(), 2);
        run(&mut r, 60);
        assert_eq!(r.index(), 2);
    }

    #[test]
    fn manual_navigation_does_not_reset_schedule() {
        let mut r = rotation(3);
        // t=15: auto-advance to 1.
        run(&mut r, 15);
        assert_eq!(r.index(), 1);
        // t=16: user steps back to 0.
        run(&mut r, 1);
        r.prev();
        assert_eq!(r.index(), 0);
        // t=30: the original schedule fires, unaffected by the manual step.
        run(&mut r, 14);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn scenario_pause_resume() {
        // sequence [A,B,C], period 15: pause at t=31, resume at t=40,
        // next auto-advance 15 seconds after the resume.
        let mut r = rotation(3);
        run(&mut r, 30);
        assert_eq!(r.index(), 2);
        run(&mut r, 1);
        r.pin();
        run(&mut r, 9);
        assert_eq!(r.index(), 2);
        r.unpin();
        run(&mut r, 14);
        assert_eq!(r.index(), 2);
        run(&mut r, 1);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn shrinking_sequence_clamps_index_via_modulo() {
        let mut r = SlideRotation::new(vec!["a", "b", "c", "d"]);
        r.next();
        r.next();
        r.next();
        assert_eq!(r.index(), 3);
        r.set_items(vec!["a", "b"]);
        assert_eq!(r.index(), 1);
        assert_eq!(r.current(), Some(&"b"));
    }
}
