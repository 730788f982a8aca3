//! Countdown timer posting ticks into the event queue.
//!
//! The ticker thread never touches game state; it only sends
//! `Event::TimerTick`. Stopping is two-phase: `request_stop` raises a flag
//! and the ticker honours it at its next wake-up.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::events::{Event, EventSender};

const IDLE: u8 = 0;
const RUNNING: u8 = 1;
const STOPPING: u8 = 2;

/// What `TimerState::begin` decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Begin {
    /// No ticker is alive; spawn one.
    Spawn,
    /// A pending stop was withdrawn; the live ticker keeps going.
    Withdrawn,
    AlreadyRunning,
}

/// Ticker life cycle as one atomic: `IDLE -> RUNNING <-> STOPPING -> IDLE`.
///
/// Every transition is a single compare-exchange.
#[derive(Debug, Default)]
struct TimerState(AtomicU8);

impl TimerState {
    fn load(&self) -> u8 {
        self.0.load(Ordering::SeqCst)
    }

    fn exchange(&self, from: u8, to: u8) -> Result<u8, u8> {
        self.0.compare_exchange(from, to, Ordering::SeqCst, Ordering::SeqCst)
    }

    fn begin(&self) -> Begin {
        loop {
            match self.exchange(STOPPING, RUNNING) {
                Ok(_) => return Begin::Withdrawn,
                Err(RUNNING) => return Begin::AlreadyRunning,
                Err(_) => {}
            }
            if self.exchange(IDLE, RUNNING).is_ok() {
                return Begin::Spawn;
            }
        }
    }

    fn request_stop(&self) {
        let _ = self.exchange(RUNNING, STOPPING);
    }

    /// Called by the ticker on wake-up. Returns `true` if it must exit.
    fn finish_if_stopping(&self) -> bool {
        self.exchange(STOPPING, IDLE).is_ok()
    }

    fn abandon(&self) {
        self.0.store(IDLE, Ordering::SeqCst);
    }
}

/// Periodic tick source.
#[derive(Debug)]
pub struct CountdownTimer {
    period: Duration,
    sender: EventSender,
    state: Arc<TimerState>,
}

impl CountdownTimer {
    /// Create a stopped timer.
    #[must_use]
    pub fn new(period: Duration, sender: EventSender) -> Self {
        Self {
            period,
            sender,
            state: Arc::new(TimerState::default()),
        }
    }

    /// Check if the ticker thread is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.load() != IDLE
    }

    /// Check if a stop is pending.
    #[must_use]
    pub fn stop_requested(&self) -> bool {
        self.state.load() == STOPPING
    }

    /// Start ticking.
    ///
    /// If the timer is still running because a stop was requested but not
    /// yet honoured, the request is withdrawn instead of spawning a second
    /// ticker.
    pub fn start(&mut self) {
        match self.state.begin() {
            Begin::Withdrawn => {
                debug!("countdown stop withdrawn");
                return;
            }
            Begin::AlreadyRunning => {
                warn!("countdown already running");
                return;
            }
            Begin::Spawn => {}
        }

        let state = Arc::clone(&self.state);
        let sender = self.sender.clone();
        let period = self.period;
        thread::spawn(move || loop {
            thread::sleep(period);
            if state.finish_if_stopping() {
                debug!("countdown stopped");
                break;
            }
            if sender.send(Event::TimerTick).is_err() {
                state.abandon();
                break;
            }
        });
        debug!(period_ms = self.period.as_millis() as u64, "countdown started");
    }

    /// Ask the ticker to stop at its next wake-up.
    pub fn request_stop(&mut self) {
        self.state.request_stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::events::channel;

    #[test]
    fn test_ticks_arrive_through_queue() {
        let (tx, rx) = channel();
        let mut timer = CountdownTimer::new(Duration::from_millis(5), tx);
        timer.start();
        assert!(timer.is_running());

        for _ in 0..3 {
            let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert_eq!(event, Event::TimerTick);
        }
        timer.request_stop();
    }

    #[test]
    fn test_stop_is_honoured_at_next_tick() {
        let (tx, rx) = channel();
        let mut timer = CountdownTimer::new(Duration::from_millis(5), tx);
        timer.start();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();

        timer.request_stop();
        assert!(timer.stop_requested() || !timer.is_running());

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while timer.is_running() && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(!timer.is_running());
        assert!(!timer.stop_requested());

        // drain whatever was posted before the stop
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(30));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_request_stop_when_idle_is_noop() {
        let (tx, _rx) = channel();
        let mut timer = CountdownTimer::new(Duration::from_millis(5), tx);
        timer.request_stop();
        assert!(!timer.stop_requested());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_state_transitions() {
        let state = TimerState::default();
        assert!(!state.finish_if_stopping());
        state.request_stop();
        assert_eq!(state.load(), IDLE);

        assert_eq!(state.begin(), Begin::Spawn);
        assert_eq!(state.begin(), Begin::AlreadyRunning);
        assert!(!state.finish_if_stopping());

        state.request_stop();
        assert!(state.finish_if_stopping());
        assert_eq!(state.load(), IDLE);
        assert_eq!(state.begin(), Begin::Spawn);
    }

    /// A restart that lands right after the ticker honoured a stop gets a
    /// fresh ticker; one that lands before keeps the old ticker alive.
    #[test]
    fn test_restart_around_honoured_stop() {
        let state = TimerState::default();
        assert_eq!(state.begin(), Begin::Spawn);

        state.request_stop();
        assert_eq!(state.begin(), Begin::Withdrawn);
        assert!(!state.finish_if_stopping());
        assert_eq!(state.load(), RUNNING);

        state.request_stop();
        assert!(state.finish_if_stopping());
        assert_eq!(state.begin(), Begin::Spawn);
        assert_eq!(state.load(), RUNNING);
    }

    #[test]
    fn test_restart_withdraws_pending_stop() {
        let (tx, rx) = channel();
        let mut timer = CountdownTimer::new(Duration::from_millis(50), tx);
        timer.start();
        timer.request_stop();
        timer.start();
        assert!(!timer.stop_requested());
        assert!(timer.is_running());

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), Event::TimerTick);
        timer.request_stop();
    }
}
