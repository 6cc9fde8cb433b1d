use std::collections::VecDeque;

use rand::Rng;

use super::state::Cell;

/// The food pellet: a single grid cell, never overlapping the snake
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Spawn food on a cell free of `occupied`
    pub fn spawn<R: Rng>(rng: &mut R, grid_size: usize, occupied: &VecDeque<Cell>) -> Self {
        let mut food = Self {
            position: Cell::new(0, 0),
        };
        food.relocate(rng, grid_size, occupied);
        food
    }

    /// Re-roll the position until it misses every occupied cell.
    ///
    /// Rejection sampling terminates almost surely while the body covers
    /// less than the whole grid; a body filling the entire grid would spin
    /// here forever.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, grid_size: usize, occupied: &VecDeque<Cell>) {
        let side = grid_size as i32;
        loop {
            let candidate = Cell::new(rng.gen_range(0..side), rng.gen_range(0..side));
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return;
            }
        }
    }
}
