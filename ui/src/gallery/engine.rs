//! Carousel state for the photo gallery.
//!
//! The visible window starts at `start` and covers `min(per_view, N)`
//! consecutive images (indices taken mod N). Forward motion cycles through
//! `N - per_view + 1` positions; backward motion from 0 lands on
//! `N - per_view`. With `N <= per_view` there is a single position.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One image shown in the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleSlot {
    /// Index into the image set.
    pub image: usize,
    /// Grid column, `1..=per_view`, in visitation order.
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    images: Vec<String>,
    per_view: usize,
    start: usize,
}

impl GalleryState {
    pub fn new(images: Vec<String>, per_view: usize) -> Self {
        Self {
            images,
            per_view: per_view.max(1),
            start: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of distinct window positions (one indicator each).
    pub fn positions(&self) -> usize {
        (self.images.len() + 1).saturating_sub(self.per_view).max(1)
    }

    /// Last position a full window can start from.
    fn last_start(&self) -> usize {
        self.images.len().saturating_sub(self.per_view)
    }

    pub fn advance(&mut self, direction: Direction) {
        self.start = match direction {
            Direction::Forward => (self.start + 1) % self.positions(),
            Direction::Backward => match self.start.checked_sub(1) {
                Some(prev) => prev,
                None => self.last_start(),
            },
        };
    }

    /// Timer step. Same move as "next", taken from wherever manual
    /// navigation left the window; nothing resets or pauses it.
    pub fn autoplay_tick(&mut self) {
        self.advance(Direction::Forward);
    }

    /// Move straight to an indicator position. Callers pass valid positions.
    pub fn jump_to(&mut self, position: usize) {
        self.start = position;
    }

    /// Images visible for the current `start`, in column order.
    pub fn window(&self) -> Vec<VisibleSlot> {
        let total = self.images.len();
        if total == 0 {
            return Vec::new();
        }
        (0..self.per_view.min(total))
            .map(|offset| VisibleSlot {
                image: (self.start + offset) % total,
                column: offset + 1,
            })
            .collect()
    }

    /// Column an image occupies, or `None` when it is hidden.
    pub fn column_of(&self, image: usize) -> Option<usize> {
        self.window()
            .into_iter()
            .find(|slot| slot.image == image)
            .map(|slot| slot.column)
    }

    pub fn is_active_position(&self, position: usize) -> bool {
        position == self.start
    }

    pub fn prev_disabled(&self) -> bool {
        self.start == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.start >= self.last_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GalleryState {
        GalleryState::new((1..=n).map(|i| format!("gallery{i}.jpeg")).collect(), 3)
    }

    #[test]
    fn forward_advances_cycle_through_full_windows() {
        for n in 4..=9 {
            let mut state = gallery(n);
            for k in 1..=25 {
                state.advance(Direction::Forward);
                assert_eq!(state.start(), k % (n - 3 + 1), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn backward_from_zero_lands_on_last_full_window() {
        let mut state = gallery(7);
        state.advance(Direction::Backward);
        assert_eq!(state.start(), 4);
        state.advance(Direction::Backward);
        assert_eq!(state.start(), 3);
    }

    #[test]
    fn window_assigns_columns_in_visitation_order() {
        let mut state = gallery(7);
        state.jump_to(4);
        assert_eq!(
            state.window(),
            vec![
                VisibleSlot { image: 4, column: 1 },
                VisibleSlot { image: 5, column: 2 },
                VisibleSlot { image: 6, column: 3 },
            ]
        );
        assert_eq!(state.column_of(0), None);
        assert_eq!(state.column_of(5), Some(2));
    }

    #[test]
    fn controls_disable_at_the_boundaries() {
        let mut state = gallery(7);
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());

        state.jump_to(2);
        assert!(!state.prev_disabled());
        assert!(!state.next_disabled());

        state.jump_to(4);
        assert!(state.next_disabled());
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut state = gallery(7);
        assert_eq!(state.positions(), 5);
        state.jump_to(3);
        let active: Vec<_> = (0..state.positions())
            .filter(|p| state.is_active_position(*p))
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn autoplay_continues_from_manual_position() {
        let mut state = gallery(7);
        state.autoplay_tick();
        assert_eq!(state.start(), 1);

        state.jump_to(3);
        state.autoplay_tick();
        assert_eq!(state.start(), 4);

        state.advance(Direction::Backward);
        state.autoplay_tick();
        assert_eq!(state.start(), 4);

        // From the last full window the timer wraps to the first.
        state.autoplay_tick();
        assert_eq!(state.start(), 0);
    }

    #[test]
    fn small_sets_show_everything_and_never_move() {
        for n in 1..=3 {
            let mut state = gallery(n);
            assert_eq!(state.positions(), 1);
            assert_eq!(state.window().len(), n);
            state.advance(Direction::Forward);
            assert_eq!(state.start(), 0);
            state.autoplay_tick();
            assert_eq!(state.start(), 0);
            state.advance(Direction::Backward);
            assert_eq!(state.start(), 0);
            assert!(state.prev_disabled() && state.next_disabled());
        }
    }
}
