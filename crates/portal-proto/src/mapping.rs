//! Display-only conversions between wire bytes and physical units.
//!
//! These mirror how the firmware interprets value bytes. None of them are
//! part of the wire contract; the frame carries the raw byte either way.

/// Map a value byte to tempo in beats per minute (60-180).
#[must_use]
pub fn bpm(value: u8) -> f32 {
    60.0 + (f32::from(value) / 255.0) * 120.0
}

/// Map a value byte to a normalized 0.0-1.0 range (intensity, hue).
#[must_use]
pub fn normalized(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// Map a value byte to an LED index on a strip of `led_count` LEDs.
#[must_use]
pub fn led_position(value: u8, led_count: u8) -> u8 {
    let Some(span) = led_count.checked_sub(1) else {
        return 0;
    };
    ((u16::from(value) * u16::from(span)) / 255) as u8
}
