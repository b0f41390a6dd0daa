//! Ring-buffer event log shown on the overlay page.
//!
//! Keeps the most recent events (taps, connectivity changes, haptic pulses,
//! minute ticks) in a fixed-capacity `heapless` ring buffer: no allocation,
//! oldest line evicted when full. The overlay rendering lives in
//! [`crate::render`]; this module only stores the lines.

use heapless::{Deque, String};

/// Maximum number of log lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line; longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 48;

/// Fixed-capacity event log, newest line last.
#[derive(Default)]
pub struct EventLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    pub fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a line, evicting the oldest if the buffer is full.
    /// Messages longer than [`LOG_LINE_LENGTH`] are truncated.
    pub fn push(&mut self, message: &str) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for ch in message.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        // Cannot fail: a slot was just freed if the buffer was full.
        let _ = self.lines.push_back(line);
    }

    /// Lines in chronological order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Number of stored lines.
    pub fn len(&self) -> usize { self.lines.len() }

    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut log = EventLog::new();
        log.push("first");
        log.push("second");
        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, vec!["first", "second"], "Lines must come back oldest-first");
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_BUFFER_SIZE + 2 {
            log.push(&format!("line {i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE, "Buffer must cap at its capacity");
        assert_eq!(log.iter().next(), Some("line 2"), "Oldest lines must be evicted first");
    }

    #[test]
    fn test_long_message_truncated() {
        let mut log = EventLog::new();
        let long = "x".repeat(LOG_LINE_LENGTH + 20);
        log.push(&long);
        assert_eq!(log.iter().next().unwrap().len(), LOG_LINE_LENGTH);
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.iter().count(), 0);
    }
}
