//! Slide navigation.
//!
//! The navigator owns the deck and a cursor into it, and keeps exactly one
//! slide visible whenever the deck is non-empty. Requests that would leave the
//! deck are dropped without a signal: stray input at either end of the deck is
//! expected and is not an error.

/// Capability to show or hide a slide on some rendering surface.
pub trait Visibility {
    /// Make the slide visible.
    fn show(&mut self);

    /// Make the slide hidden.
    fn hide(&mut self);

    /// Whether the slide is currently visible.
    fn is_visible(&self) -> bool;
}

/// Ordered deck of slides with a single visible slide at the cursor.
#[derive(Debug, Clone)]
pub struct Navigator<S> {
    deck: Vec<S>,
    cursor: usize,
}

impl<S: Visibility> Navigator<S> {
    /// Take ownership of `deck`, showing the first slide and hiding the rest.
    pub fn new(mut deck: Vec<S>) -> Self {
        for (i, slide) in deck.iter_mut().enumerate() {
            if i == 0 {
                slide.show();
            } else {
                slide.hide();
            }
        }
        Self { deck, cursor: 0 }
    }

    /// Move to `index`. Out-of-range indices leave everything unchanged.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.deck.len() {
            return;
        }
        self.deck[self.cursor].hide();
        self.cursor = index;
        self.deck[self.cursor].show();
    }

    /// Move one slide forward. No-op on the last slide.
    pub fn next(&mut self) {
        self.go_to(self.cursor + 1);
    }

    /// Move one slide back. No-op on the first slide.
    pub fn previous(&mut self) {
        if let Some(index) = self.cursor.checked_sub(1) {
            self.go_to(index);
        }
    }

    /// Index of the visible slide.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The visible slide, if the deck is non-empty.
    pub fn current(&self) -> Option<&S> {
        self.deck.get(self.cursor)
    }

    /// All slides in deck order.
    pub fn slides(&self) -> &[S] {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[derive(Debug, Default)]
    struct Flag {
        visible: bool,
        toggles: usize,
    }

    impl Visibility for Flag {
        fn show(&mut self) {
            self.visible = true;
            self.toggles += 1;
        }

        fn hide(&mut self) {
            self.visible = false;
            self.toggles += 1;
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    fn deck(n: usize) -> Navigator<Flag> {
        Navigator::new((0..n).map(|_| Flag::default()).collect())
    }

    fn visible(nav: &Navigator<Flag>) -> Vec<usize> {
        nav.slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_visible())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_new_shows_only_first() {
        let nav = deck(3);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(visible(&nav), vec![0]);
    }

    #[test]
    fn test_three_slide_scenario() {
        let mut nav = deck(3);

        nav.next();
        assert_eq!(nav.cursor(), 1);
        assert_eq!(visible(&nav), vec![1]);

        nav.next();
        nav.next();
        assert_eq!(nav.cursor(), 2);
        assert_eq!(visible(&nav), vec![2]);

        nav.previous();
        assert_eq!(nav.cursor(), 1);
        assert_eq!(visible(&nav), vec![1]);
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut nav = deck(4);
        nav.previous();
        assert_eq!(nav.cursor(), 0);
        assert_eq!(visible(&nav), vec![0]);
    }

    #[test]
    fn test_next_clamps_without_wraparound() {
        let n = 5;
        let mut nav = deck(n);
        for _ in 0..n - 1 {
            nav.next();
        }
        assert_eq!(nav.cursor(), n - 1);
        nav.next();
        assert_eq!(nav.cursor(), n - 1);
        assert_eq!(visible(&nav), vec![n - 1]);
    }

    #[test]
    fn test_go_to_out_of_range_changes_nothing() {
        let mut nav = deck(3);
        nav.go_to(1);
        let toggles: Vec<usize> = nav.slides().iter().map(|s| s.toggles).collect();

        nav.go_to(3);
        nav.go_to(usize::MAX);

        assert_eq!(nav.cursor(), 1);
        assert_eq!(visible(&nav), vec![1]);
        let after: Vec<usize> = nav.slides().iter().map(|s| s.toggles).collect();
        assert_eq!(toggles, after);
    }

    #[test]
    fn test_go_to_same_index_keeps_slide_visible() {
        let mut nav = deck(2);
        nav.go_to(0);
        assert_eq!(visible(&nav), vec![0]);
    }

    #[test]
    fn test_empty_deck_navigation_is_noop() {
        let mut nav = deck(0);
        nav.next();
        nav.previous();
        nav.go_to(0);
        assert!(nav.is_empty());
        assert_eq!(nav.cursor(), 0);
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_single_slide_stays_visible() {
        let mut nav = deck(1);
        nav.next();
        nav.previous();
        assert_eq!(visible(&nav), vec![0]);
    }

    #[test]
    fn test_mixed_walk_keeps_invariant() {
        let n = 4;
        let mut nav = deck(n);
        // Deterministic pseudo-random walk over next/previous/go_to.
        let mut seed: u32 = 7;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 3 {
                0 => nav.next(),
                1 => nav.previous(),
                _ => nav.go_to(((seed >> 8) % 6) as usize),
            }
            assert!(nav.cursor() < n);
            assert_eq!(visible(&nav), vec![nav.cursor()]);
        }
    }
}
