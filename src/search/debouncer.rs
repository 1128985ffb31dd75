use std::time::{Duration, Instant};

/// Delays live search requests until typing pauses.
///
/// Every keystroke calls `schedule_execution`, restarting the timer, so a burst
/// of input collapses into a single request once `delay` has passed.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether there's a pending request waiting for debounce to expire
    pending_execution: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input_time: None,
            pending_execution: false,
        }
    }

    pub fn schedule_execution(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending_execution = true;
    }

    pub fn should_execute(&self) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= self.delay,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    /// Drop a pending execution without running it
    pub fn cancel(&mut self) {
        self.mark_executed();
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
