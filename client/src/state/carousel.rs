//! Active-screen index for the phone mockup carousel.
//!
//! The index only moves when a dot is clicked. There is no auto-advance and
//! no wraparound.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` screens, starting at index 0.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(self) -> usize {
        self.active
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn is_active(self, index: usize) -> bool {
        self.active == index
    }

    /// Jump to `index`. Out-of-range indices are ignored and `false` is
    /// returned.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }
}
