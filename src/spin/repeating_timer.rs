//! Single-slot repeating timer
//!
//! The event loop asks the timer whether a period has elapsed instead of the
//! timer owning a thread. At most one schedule exists: starting replaces the
//! previous handle and cancelling clears it.

use std::time::{Duration, Instant};

/// Identifies one schedule; a restart yields a new handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Schedule {
    handle: TimerHandle,
    next_due: Instant,
}

#[derive(Debug)]
pub struct RepeatingTimer {
    period: Duration,
    schedule: Option<Schedule>,
    next_handle: u64,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            schedule: None,
            next_handle: 0,
        }
    }

    /// Schedule the first firing one period after `now`
    ///
    /// Any outstanding schedule is cancelled first.
    pub fn start(&mut self, now: Instant) -> TimerHandle {
        if let Some(old) = self.cancel() {
            log::debug!("Replacing outstanding timer {:?}", old);
        }
        self.next_handle = self.next_handle.wrapping_add(1);
        let handle = TimerHandle(self.next_handle);
        self.schedule = Some(Schedule {
            handle,
            next_due: now + self.period,
        });
        handle
    }

    /// Drop the outstanding schedule, returning its handle
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.schedule.take().map(|s| s.handle)
    }

    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.schedule.map(|s| s.handle)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.map(|s| s.next_due)
    }

    /// Time left until the next firing, zero if already due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Fire at most once if a period has elapsed
    ///
    /// Missed periods are skipped so a stalled loop does not burst.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if now < schedule.next_due {
            return false;
        }

        let period = self.period.as_nanos().max(1);
        let behind = now.duration_since(schedule.next_due).as_nanos();
        let advance = (behind / period + 1) * period;
        let next = u64::try_from(advance)
            .ok()
            .and_then(|nanos| schedule.next_due.checked_add(Duration::from_nanos(nanos)))
            .filter(|next| *next > now);
        schedule.next_due = next.unwrap_or(now + self.period);
        true
    }
}
