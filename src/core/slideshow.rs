use std::time::{Duration, Instant};

/// One armed deadline of the rotation chain. Each fired tick arms the
/// next one; dropping the timer is the cancellation.
#[derive(Debug, Clone, Copy)]
struct SlideTimer {
    deadline: Instant,
}

/// Timed rotation through a fixed sequence of frames.
///
/// The timer lives inside the slideshow, so whoever owns the slideshow
/// owns its cancellation: screens cancel on teardown and no tick can
/// outlive the frames it points into. An empty sequence never arms a
/// timer.
#[derive(Debug)]
pub struct Slideshow<T> {
    frames: Vec<T>,
    index: usize,
    interval: Duration,
    timer: Option<SlideTimer>,
}

impl<T> Slideshow<T> {
    pub fn new(frames: Vec<T>, interval: Duration) -> Self {
        Self {
            frames,
            index: 0,
            interval,
            timer: None,
        }
    }

    /// Shows the first frame and arms the rotation. Does nothing when
    /// there are no frames.
    pub fn start(&mut self, now: Instant) {
        if self.frames.is_empty() {
            return;
        }
        self.index = 0;
        self.timer = Some(SlideTimer {
            deadline: now + self.interval,
        });
    }

    /// Advances past an expired deadline and arms the next one. Returns
    /// whether the displayed frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        if now < timer.deadline {
            return false;
        }
        self.index = (self.index + 1) % self.frames.len();
        self.timer = Some(SlideTimer {
            deadline: now + self.interval,
        });
        true
    }

    /// Disarms the pending deadline. Idempotent.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn current(&self) -> Option<&T> {
        self.frames.get(self.index)
    }

    /// Time left until the armed deadline, zero if it already passed.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(2000);

    fn running_show(frames: usize, start: Instant) -> Slideshow<usize> {
        let mut show = Slideshow::new((0..frames).collect(), INTERVAL);
        show.start(start);
        show
    }

    #[test]
    fn empty_sequence_arms_no_timer() {
        let start = Instant::now();
        let mut show: Slideshow<usize> = Slideshow::new(Vec::new(), INTERVAL);
        show.start(start);

        assert!(!show.is_running());
        assert!(show.current().is_none());
        assert!(!show.tick(start + INTERVAL));
        assert!(show.time_until_tick(start).is_none());
    }

    #[test]
    fn tick_before_the_deadline_changes_nothing() {
        let start = Instant::now();
        let mut show = running_show(3, start);

        assert!(!show.tick(start + INTERVAL / 2));
        assert_eq!(show.current(), Some(&0));
    }

    #[test]
    fn tick_advances_modulo_length() {
        let start = Instant::now();
        let mut show = running_show(3, start);

        let mut now = start;
        for expected in [1, 2, 0, 1] {
            now += INTERVAL;
            assert!(show.tick(now));
            assert_eq!(show.current(), Some(&expected));
        }
    }

    #[test]
    fn a_full_cycle_returns_to_the_first_frame() {
        let start = Instant::now();
        let length = 6;
        let mut show = running_show(length, start);

        let mut now = start;
        for _ in 0..length {
            now += INTERVAL;
            assert!(show.tick(now));
        }
        assert_eq!(show.current(), Some(&0));
    }

    #[test]
    fn each_tick_rearms_the_chain() {
        let start = Instant::now();
        let mut show = running_show(2, start);

        let first_tick = start + INTERVAL;
        assert!(show.tick(first_tick));
        // The next deadline is measured from the tick that fired, not from start.
        assert_eq!(show.time_until_tick(first_tick), Some(INTERVAL));
        assert!(show.is_running());
    }

    #[test]
    fn cancel_disarms_the_pending_deadline() {
        let start = Instant::now();
        let mut show = running_show(4, start);

        show.cancel();
        assert!(!show.is_running());
        assert!(!show.tick(start + INTERVAL * 10));
        assert_eq!(show.current(), Some(&0));

        show.cancel(); // second cancel is a no-op
        assert!(!show.is_running());
    }

    #[test]
    fn single_frame_rotation_stays_on_that_frame() {
        let start = Instant::now();
        let mut show = running_show(1, start);

        assert!(show.tick(start + INTERVAL));
        assert_eq!(show.current(), Some(&0));
        assert!(show.is_running());
    }
}
