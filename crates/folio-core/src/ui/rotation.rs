//! Auto-advancing index used by the work carousel.
//!
//! The view arms a one-shot countdown for the current [`generation`] and
//! calls [`Rotation::advance`] when it fires. Any change of index or pause
//! state bumps the generation, so a countdown armed before a jump or hover
//! is dropped and the next one starts from zero.
//!
//! [`generation`]: Rotation::generation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
    paused: bool,
    generation: u64,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
            generation: 0,
        }
    }

    /// Bumped whenever the index or pause state changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a countdown should be armed at all.
    pub fn is_running(&self) -> bool {
        !self.paused && self.len >= 2
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Hovering pauses the timer.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            self.bump();
        }
    }

    /// Timer tick. Wraps past the last item; a no-op while paused or with
    /// fewer than two items.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.bump();
        true
    }

    /// Countdown armed at `generation` has elapsed. Stale countdowns are
    /// ignored.
    pub fn advance(&mut self, generation: u64) -> bool {
        generation == self.generation && self.tick()
    }

    pub fn jump(&mut self, index: usize) {
        if index < self.len && index != self.index {
            self.index = index;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps() {
        let mut rotation = Rotation::new(3);
        rotation.tick();
        rotation.tick();
        assert_eq!(rotation.index(), 2);
        rotation.tick();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_paused_holds() {
        let mut rotation = Rotation::new(3);
        rotation.set_paused(true);
        assert!(!rotation.tick());
        assert_eq!(rotation.index(), 0);
        rotation.set_paused(false);
        assert!(rotation.tick());
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut rotation = Rotation::new(1);
        assert!(!rotation.tick());
    }

    #[test]
    fn test_jump_rearms_countdown() {
        let mut rotation = Rotation::new(3);
        let armed = rotation.generation();
        rotation.jump(2);
        // The countdown armed before the jump must not advance the new slide
        assert!(!rotation.advance(armed));
        assert_eq!(rotation.index(), 2);

        let rearmed = rotation.generation();
        assert!(rotation.advance(rearmed));
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_unhover_rearms_countdown() {
        let mut rotation = Rotation::new(3);
        let armed = rotation.generation();
        rotation.set_paused(true);
        assert!(!rotation.is_running());
        rotation.set_paused(false);
        assert!(rotation.is_running());
        assert!(!rotation.advance(armed));
        assert!(rotation.advance(rotation.generation()));
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn test_noop_changes_keep_countdown() {
        let mut rotation = Rotation::new(3);
        let armed = rotation.generation();
        rotation.jump(0);
        rotation.set_paused(false);
        assert_eq!(rotation.generation(), armed);
        assert!(rotation.advance(armed));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut rotation = Rotation::new(2);
        rotation.jump(1);
        rotation.jump(5);
        assert_eq!(rotation.index(), 1);
    }
}
