//! Quality bounds and single-step movement.
//!
//! Movement is one point at a time. A step that would leave `[0, 50]` is
//! skipped, and a value that already sits outside the range is never pulled
//! back into it.

/// Lowest quality the daily update will lower an item to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality the daily update will raise an item to.
pub const MAX_QUALITY: i32 = 50;

/// Raise by one point unless already at or above the ceiling.
pub fn raise(quality: i32) -> i32 {
    if quality < MAX_QUALITY {
        quality + 1
    } else {
        quality
    }
}

/// Lower by one point unless already at or below the floor.
pub fn lower(quality: i32) -> i32 {
    if quality > MIN_QUALITY {
        quality - 1
    } else {
        quality
    }
}

/// Raise `steps` times, checking the ceiling before each step.
pub fn raise_by(quality: i32, steps: u32) -> i32 {
    (0..steps).fold(quality, |q, _| raise(q))
}
