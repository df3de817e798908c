//! Cyclic Keyboard Focus
//!
//! Every screen with a row of selectable elements (title buttons, settings
//! sliders, the character lineup) moves its focus the same way: one step at a
//! time, wrapping past either end.

/// Steps `current` by `delta` within `0..count`, wrapping at both ends.
///
/// Uses Euclidean remainder, so stepping backwards from 0 lands on
/// `count - 1`. `count` must be non-zero.
pub fn step(current: usize, count: usize, delta: isize) -> usize {
    debug_assert!(count > 0, "focus cycle needs at least one element");
    (current as isize + delta).rem_euclid(count as isize) as usize
}

/// Focus index over a fixed number of elements
///
/// Invariant: `index < count`. The count never changes after construction.
///
/// # Example
///
/// ```rust
/// let mut focus = FocusCycle::new(3);
/// focus.previous();
/// assert_eq!(focus.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCycle {
    index: usize,
    count: usize,
}

impl FocusCycle {
    /// Creates a cycle over `count` elements with focus on the first.
    ///
    /// A zero count is clamped to one so the invariant always holds.
    pub fn new(count: usize) -> Self {
        FocusCycle {
            index: 0,
            count: count.max(1),
        }
    }

    /// Move focus forward (wraps to first)
    pub fn next(&mut self) {
        self.index = step(self.index, self.count, 1);
    }

    /// Move focus backward (wraps to last)
    pub fn previous(&mut self) {
        self.index = step(self.index, self.count, -1);
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
