//! Random helpers for game loops

use rand::Rng;

use crate::tictactoe::Action;

/// Uniformly random `(row, col)` with both indices in `[0, max)`.
///
/// The cell is not checked for legality; callers retry or validate through
/// [`crate::tictactoe::Board::apply`].
///
/// # Panics
///
/// Panics if `max` is zero.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use ttt_search::utils::random_move;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let action = random_move(3, &mut rng);
/// assert!(action.row < 3 && action.col < 3);
/// ```
pub fn random_move<R: Rng>(max: usize, rng: &mut R) -> Action {
    let row = rng.random_range(0..max);
    let col = rng.random_range(0..max);
    Action::new(row, col)
}
