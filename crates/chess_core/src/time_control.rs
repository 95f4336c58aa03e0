//! Search limits and the stop signal.
//!
//! Depth is always a bound. A move time, or an explicit stop through a
//! [`StopHandle`], ends the search early; engines check the signal between
//! sibling moves and return the best move found so far.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag another thread can raise to end a running search.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = depth only)
    pub move_time: Option<Duration>,
    pub stop: StopHandle,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            stop: StopHandle::new(),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::depth(depth)
        }
    }

    /// Time bound only; depth is capped at `u8::MAX` plies.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(u8::MAX, move_time)
    }

    /// Start the clock for one search.
    pub fn start(&self) -> TimeControl {
        self.stop.reset();
        TimeControl {
            stop: self.stop.clone(),
            started: Instant::now(),
            time_limit: self.move_time,
            check_interval: 1024,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Clock for a running search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stop: StopHandle,
    started: Instant,
    time_limit: Option<Duration>,
    /// Nodes between clock reads.
    check_interval: u64,
}

impl TimeControl {
    /// A clock that never expires on its own.
    pub fn unlimited() -> Self {
        SearchLimits::depth(u8::MAX).start()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Read the clock and raise the stop flag if the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit
            && self.started.elapsed() >= limit
        {
            self.stop();
            return true;
        }
        false
    }

    /// Nodes a search may visit between clock reads.
    #[inline]
    pub fn check_interval(&self) -> u64 {
        self.check_interval
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left before the limit (None if unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
