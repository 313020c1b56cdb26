//! Countdown and repeating-interval tasks on a virtual clock.
//!
//! The host drives time by calling [`TimerService::tick`] once per elapsed
//! second. Instead of invoking callbacks, a tick returns the [`TimerEvent`]s
//! that came due during that second; the owning round handles them. A task
//! that was cancelled never produces an event again.
//!
//! ## Ordering
//!
//! Within one second the interval fires before the countdown expires, and
//! an expired countdown is removed before the events are returned.
//!
//! ```
//! use word_party::timer::{TimerEvent, TimerService};
//!
//! let mut timers = TimerService::new();
//! timers.start(3);
//! timers.start_interval(2);
//!
//! assert!(timers.tick().is_empty());
//! assert_eq!(timers.tick().as_slice(), &[TimerEvent::Interval]);
//! assert_eq!(timers.tick().as_slice(), &[TimerEvent::Expired]);
//! assert_eq!(timers.remaining_secs(), None);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Something that came due during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// The countdown reached zero.
    Expired,
    /// The repeating interval fired.
    Interval,
}

/// Events produced by a single tick.
pub type TimerEvents = SmallVec<[TimerEvent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Countdown {
    duration: u32,
    remaining: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Interval {
    period: u32,
    until_next: u32,
}

/// One countdown plus one independent repeating interval.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerService {
    countdown: Option<Countdown>,
    interval: Option<Interval>,
    paused: bool,
    elapsed: u64,
}

impl TimerService {
    /// Create a service with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown, replacing any running one.
    pub fn start(&mut self, duration_secs: u32) {
        self.countdown = Some(Countdown {
            duration: duration_secs,
            remaining: duration_secs,
        });
    }

    /// Stop the countdown without firing it.
    pub fn cancel(&mut self) {
        self.countdown = None;
    }

    /// Start a repeating interval, replacing any running one.
    pub fn start_interval(&mut self, period_secs: u32) {
        self.interval = Some(Interval {
            period: period_secs,
            until_next: period_secs,
        });
    }

    /// Stop the repeating interval.
    pub fn cancel_interval(&mut self) {
        self.interval = None;
    }

    /// Stop both tasks.
    pub fn cancel_all(&mut self) {
        self.countdown = None;
        self.interval = None;
    }

    /// Freeze both tasks; ticks are ignored until [`TimerService::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue after a pause.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds left on the countdown, if one is running.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining)
    }

    /// Full length of the running countdown.
    #[must_use]
    pub fn countdown_duration(&self) -> Option<u32> {
        self.countdown.map(|c| c.duration)
    }

    /// Whether the repeating interval is scheduled.
    #[must_use]
    pub fn interval_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.countdown.is_none() && self.interval.is_none()
    }

    /// Seconds this service has been ticked while running.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed
    }

    /// Advance the clock by one second and return what came due.
    pub fn tick(&mut self) -> TimerEvents {
        let mut events = TimerEvents::new();
        if self.paused || self.is_idle() {
            return events;
        }
        self.elapsed += 1;

        if let Some(interval) = self.interval.as_mut() {
            interval.until_next = interval.until_next.saturating_sub(1);
            if interval.until_next == 0 {
                interval.until_next = interval.period;
                events.push(TimerEvent::Interval);
            }
        }

        if let Some(countdown) = self.countdown.as_mut() {
            countdown.remaining = countdown.remaining.saturating_sub(1);
            if countdown.remaining == 0 {
                self.countdown = None;
                events.push(TimerEvent::Expired);
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(timers: &mut TimerService, secs: u32) -> Vec<(u32, TimerEvent)> {
        (1..=secs)
            .flat_map(|s| timers.tick().into_iter().map(move |e| (s, e)))
            .collect()
    }

    #[test]
    fn test_countdown_expires_once() {
        let mut timers = TimerService::new();
        timers.start(30);

        let events = run(&mut timers, 40);
        assert_eq!(events, vec![(30, TimerEvent::Expired)]);
        assert!(timers.is_idle());
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut timers = TimerService::new();
        timers.start(60);
        run(&mut timers, 15);
        assert_eq!(timers.remaining_secs(), Some(45));
        assert_eq!(timers.countdown_duration(), Some(60));
    }

    #[test]
    fn test_cancel_prevents_expiry() {
        let mut timers = TimerService::new();
        timers.start(5);
        run(&mut timers, 3);
        timers.cancel();

        assert!(run(&mut timers, 10).is_empty());
    }

    #[test]
    fn test_start_replaces_running_countdown() {
        let mut timers = TimerService::new();
        timers.start(5);
        run(&mut timers, 4);
        timers.start(5);

        let events = run(&mut timers, 5);
        assert_eq!(events, vec![(5, TimerEvent::Expired)]);
    }

    #[test]
    fn test_interval_repeats_alongside_countdown() {
        let mut timers = TimerService::new();
        timers.start(60);
        timers.start_interval(7);

        let events = run(&mut timers, 60);
        let reveals: Vec<u32> = events
            .iter()
            .filter(|(_, e)| *e == TimerEvent::Interval)
            .map(|(s, _)| *s)
            .collect();
        assert_eq!(reveals, vec![7, 14, 21, 28, 35, 42, 49, 56]);
        assert_eq!(events.last(), Some(&(60, TimerEvent::Expired)));

        // Interval keeps running until cancelled separately.
        assert!(timers.interval_active());
        timers.cancel_interval();
        assert!(timers.is_idle());
    }

    #[test]
    fn test_interval_before_expiry_in_same_second() {
        let mut timers = TimerService::new();
        timers.start(4);
        timers.start_interval(2);

        let events = run(&mut timers, 4);
        assert_eq!(
            events,
            vec![
                (2, TimerEvent::Interval),
                (4, TimerEvent::Interval),
                (4, TimerEvent::Expired)
            ]
        );
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut timers = TimerService::new();
        timers.start(10);
        run(&mut timers, 3);
        timers.pause();
        assert!(run(&mut timers, 20).is_empty());
        assert_eq!(timers.remaining_secs(), Some(7));

        timers.resume();
        let events = run(&mut timers, 7);
        assert_eq!(events, vec![(7, TimerEvent::Expired)]);
        assert_eq!(timers.elapsed_secs(), 10);
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = TimerService::new();
        timers.start(10);
        timers.start_interval(1);
        timers.cancel_all();
        assert!(timers.tick().is_empty());
    }
}
