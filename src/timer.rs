use std::time::Duration;

use tracing::trace;

/// Handle of one scheduled recurring callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Recurring timers owned by a host event loop.
///
/// Nothing here blocks or spawns. The host advances time with [`poll`] once
/// per loop iteration and acts on whatever fired.
///
/// [`poll`]: Scheduler::poll
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Returns false when the id was not pending.
    fn cancel(&mut self, id: TimerId) -> bool;

    fn pending(&self) -> usize;

    /// Advance the clock by `elapsed` and return every firing that became due,
    /// oldest first. A timer whose period is shorter than `elapsed` appears
    /// once per period.
    fn poll(&mut self, elapsed: Duration) -> Vec<TimerId>;
}

struct RepeatingTimer {
    id: TimerId,
    period: Duration,
    next_due: Duration,
}

/// Deterministic scheduler driven by frame time.
///
/// Time is accumulated as an integer [`Duration`], so polling `n` times by a
/// period fires a timer of that period exactly `n` times.
pub struct FrameClock {
    now: Duration,
    next_id: u64,
    timers: Vec<RepeatingTimer>,
    peak_pending: usize,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            timers: Vec::new(),
            peak_pending: 0,
        }
    }

    /// Time accumulated since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Largest number of timers that were ever pending at once.
    pub fn peak_pending(&self) -> usize {
        self.peak_pending
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    fn earliest_due(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.next_due <= self.now)
            .min_by_key(|(_, timer)| (timer.next_due, timer.id))
            .map(|(i, _)| i)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock")
            .field("now", &self.now)
            .field("pending", &self.timers.len())
            .field("peak_pending", &self.peak_pending)
            .finish()
    }
}

impl Scheduler for FrameClock {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.timers.push(RepeatingTimer {
            id,
            period,
            next_due: self.now + period,
        });
        self.peak_pending = self.peak_pending.max(self.timers.len());

        trace!(?id, ?period, "scheduled repeating timer");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        let cancelled = self.timers.len() != before;
        if cancelled {
            trace!(?id, "cancelled timer");
        }
        cancelled
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }

    fn poll(&mut self, elapsed: Duration) -> Vec<TimerId> {
        self.now += elapsed;

        let mut fired = Vec::new();
        while let Some(i) = self.earliest_due() {
            let timer = &mut self.timers[i];
            fired.push(timer.id);
            // A zero period would never leave the loop.
            timer.next_due += timer.period.max(Duration::from_nanos(1));
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_millis(100);

    #[test]
    fn fires_once_per_period() {
        let mut clock = FrameClock::new();
        let id = clock.schedule_repeating(T);

        assert!(clock.poll(T / 2).is_empty());
        assert_eq!(clock.poll(T / 2), vec![id]);
        assert_eq!(clock.poll(T * 3), vec![id, id, id]);
        assert_eq!(clock.now(), T * 4);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut clock = FrameClock::new();
        let id = clock.schedule_repeating(T);
        assert!(clock.is_pending(id));

        assert!(clock.cancel(id));
        assert!(!clock.is_pending(id));
        assert!(!clock.cancel(id));
        assert_eq!(clock.pending(), 0);
        assert!(clock.poll(T * 10).is_empty());
    }

    #[test]
    fn firings_come_out_in_time_order() {
        let mut clock = FrameClock::new();
        let slow = clock.schedule_repeating(T * 2);
        let fast = clock.schedule_repeating(T);

        assert_eq!(clock.poll(T * 4), vec![fast, slow, fast, fast, slow, fast]);
        assert_eq!(clock.peak_pending(), 2);
    }

    #[test]
    fn sixty_frames_make_one_second() {
        let mut clock = FrameClock::new();
        let id = clock.schedule_repeating(Duration::from_secs(1));

        let mut fired = Vec::new();
        for _ in 0..crate::constants::FPS {
            fired.extend(clock.poll(crate::constants::FRAME_TIME));
        }
        assert_eq!(fired, vec![id]);
    }
}
