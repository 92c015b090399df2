/// One-shot latch for "animate once the element has been seen".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one intersection reading. Returns `true` only for the reading
    /// that trips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_until_first_intersection() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn never_resets_after_scrolling_away() {
        let mut latch = RevealLatch::new();
        latch.observe(true);
        for reading in [false, false, true, false] {
            assert!(!latch.observe(reading));
            assert!(latch.is_revealed());
        }
    }
}
