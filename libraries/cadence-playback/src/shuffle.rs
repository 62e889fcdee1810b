//! Shuffle selection
//!
//! Shuffle never reorders the catalog. It only changes how the next song is
//! picked: a uniform random index that differs from the current one.

use cadence_core::IndexChooser;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

/// Index chooser backed by the thread-local RNG
#[derive(Debug, Clone, Default)]
pub struct ThreadRngChooser {
    rng: ThreadRng,
}

impl ThreadRngChooser {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl IndexChooser for ThreadRngChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick a random index in `0..len` that differs from `current`
///
/// With a single song the only choice is the current one. Draws from
/// `len - 1` slots and skips over `current`, so every other index is equally
/// likely and no retry loop is needed.
///
/// Callers guarantee `len > 0` and `current < len`.
pub fn pick_other_index(current: usize, len: usize, chooser: &mut dyn IndexChooser) -> usize {
    if len <= 1 {
        return current;
    }
    let drawn = chooser.choose(len - 1).min(len - 2);
    if drawn >= current {
        drawn + 1
    } else {
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Replays a fixed sequence of draws
    struct Scripted(Vec<usize>);

    impl IndexChooser for Scripted {
        fn choose(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    #[test]
    fn single_song_replays_current() {
        let mut chooser = ThreadRngChooser::new();
        assert_eq!(pick_other_index(0, 1, &mut chooser), 0);
    }

    #[test]
    fn skips_over_current_index() {
        let mut chooser = Scripted(vec![0, 1, 2, 3]);

        // current = 2, len = 5: slots 0,1,2,3 map to 0,1,3,4
        assert_eq!(pick_other_index(2, 5, &mut chooser), 0);
        assert_eq!(pick_other_index(2, 5, &mut chooser), 1);
        assert_eq!(pick_other_index(2, 5, &mut chooser), 3);
        assert_eq!(pick_other_index(2, 5, &mut chooser), 4);
    }

    #[test]
    fn out_of_range_draw_is_clamped() {
        let mut chooser = Scripted(vec![99]);
        assert_eq!(pick_other_index(0, 3, &mut chooser), 2);
    }

    #[test]
    fn never_returns_current_and_reaches_every_other_index() {
        let mut chooser = ThreadRngChooser::new();
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            let picked = pick_other_index(3, 6, &mut chooser);
            assert_ne!(picked, 3);
            assert!(picked < 6);
            seen.insert(picked);
        }

        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn two_songs_always_alternate() {
        let mut chooser = ThreadRngChooser::new();
        for _ in 0..100 {
            assert_eq!(pick_other_index(0, 2, &mut chooser), 1);
            assert_eq!(pick_other_index(1, 2, &mut chooser), 0);
        }
    }
}
