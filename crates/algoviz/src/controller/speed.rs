use std::time::Duration;

/// Shortest pause between steps, whatever the speed.
pub const MIN_DELAY_MS: u64 = 2;

/// Pause between steps for a speed in `1..=100`: 200 ms at speed 1, down to
/// [`MIN_DELAY_MS`] at speed 100.
pub fn delay_for(speed: u32) -> Duration {
    let ms = 202u64.saturating_sub(2 * u64::from(speed));
    Duration::from_millis(ms.max(MIN_DELAY_MS))
}
