//! Haptic alert collaborator.
//!
//! The state machine only *requests* a haptic alert (via
//! [`Effect::HapticAlert`](crate::view::Effect)); the device behind this
//! trait executes it. On real hardware this would drive a vibration motor;
//! the simulator implementation just counts pulses so the event-log overlay
//! can show them.

/// Vibration pattern for the connection-lost alert, in milliseconds:
/// initial delay, buzz, pause, buzz. Played once, no repeat.
pub const ALERT_PATTERN_MS: [u64; 4] = [0, 500, 50, 300];

/// A device that can play the alert pattern.
pub trait Haptics {
    /// Play [`ALERT_PATTERN_MS`] once.
    fn alert(&mut self);
}

/// Simulator stand-in for the vibration motor: records pulses instead of
/// buzzing.
#[derive(Default)]
pub struct SimulatorHaptics {
    pulses: u32,
}

impl SimulatorHaptics {
    pub const fn new() -> Self { Self { pulses: 0 } }

    /// Number of alert patterns played since startup.
    pub const fn pulse_count(&self) -> u32 { self.pulses }
}

impl Haptics for SimulatorHaptics {
    fn alert(&mut self) { self.pulses += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_shape() {
        // Delay, long buzz, short gap, short buzz.
        assert_eq!(ALERT_PATTERN_MS, [0, 500, 50, 300]);
    }

    #[test]
    fn test_simulator_counts_pulses() {
        let mut haptics = SimulatorHaptics::new();
        assert_eq!(haptics.pulse_count(), 0);
        haptics.alert();
        haptics.alert();
        assert_eq!(haptics.pulse_count(), 2);
    }
}
