//! Cyclic index arithmetic for the promotional slider.
//!
//! The slider wraps at both ends: stepping forward from the last slide
//! lands on the first, and stepping back from the first lands on the
//! last. An arbitrary requested index is normalized into range so a
//! hand-edited URL still lands on a real slide.

use serde::{Deserialize, Serialize};

/// A single promotional slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
}

/// Normalize a requested slide index against the slide count.
///
/// Returns 0 when there are no slides.
#[must_use]
pub const fn current(requested: usize, len: usize) -> usize {
    if len == 0 { 0 } else { requested % len }
}

/// Index of the slide after `current`, wrapping past the last slide.
#[must_use]
pub const fn next(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 >= len { 0 } else { current + 1 }
}

/// Index of the slide before `current`, wrapping before the first slide.
#[must_use]
pub const fn prev(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 { len - 1 } else { current - 1 }
}
