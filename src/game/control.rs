use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    state::{Cell, Snake},
};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head landed on the body
    Tail,
}

/// Lifecycle of a round.
///
/// Pausing remembers whether play was live, so unpausing restores the
/// previous phase exactly instead of force-starting an idle board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh board, waiting for a directional key
    Idle,
    Running,
    Paused { was_running: bool },
}

/// What a single tick did, for the shell to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// Set when the tick ended the round
    pub ended: Option<RoundEnd>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    pub collision: Collision,
    /// Score at the moment of the collision, before the reset zeroes it
    pub final_score: u32,
}

/// Owns the snake, the food and the round state, and advances the game one
/// tick at a time
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
    phase: Phase,
    rng: ThreadRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Self::spawn_snake(&config);
        let food = Food::spawn(&mut rng, config.grid_size, &snake.body);

        Self {
            config,
            snake,
            food,
            score: 0,
            phase: Phase::Idle,
            rng,
        }
    }

    /// The fixed spawn body: horizontal, facing right, in the left half of
    /// the grid so the first moves have room
    fn spawn_snake(config: &GameConfig) -> Snake {
        let head = Cell::new((config.grid_size / 4) as i32, (config.grid_size / 2) as i32);
        Snake::new(head, Direction::Right, config.initial_snake_length)
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    /// Advance one tick.
    ///
    /// Move first, then the food check, then the fatal checks, in that
    /// order: an eat that simultaneously leaves the grid or lands on the
    /// tail still registers before the round ends.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::default();
        }

        self.snake.advance();

        let mut outcome = TickOutcome::default();

        if self.snake.head() == self.food.position {
            self.food
                .relocate(&mut self.rng, self.config.grid_size, &self.snake.body);
            self.snake.grow_on_advance();
            self.score += 1;
            outcome.ate_food = true;
        }

        if !self.in_bounds(self.snake.head()) {
            outcome.ended = Some(self.game_over(Collision::Wall));
        } else if self.snake.head_bites_tail() {
            outcome.ended = Some(self.game_over(Collision::Tail));
        }

        outcome
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        let side = self.config.grid_size as i32;
        (0..side).contains(&cell.x) && (0..side).contains(&cell.y)
    }

    /// Reset the board and fall back to `Idle`; the next accepted steer
    /// starts a new round
    fn game_over(&mut self, collision: Collision) -> RoundEnd {
        let end = RoundEnd {
            collision,
            final_score: self.score,
        };

        self.snake = Self::spawn_snake(&self.config);
        self.food
            .relocate(&mut self.rng, self.config.grid_size, &self.snake.body);
        self.score = 0;
        self.phase = Phase::Idle;

        end
    }

    /// Request a direction change.
    ///
    /// Refused while paused and for direct reversals into the neck; an
    /// accepted steer also (re)starts play.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_paused() || self.snake.direction.is_opposite(direction) {
            return false;
        }

        self.snake.direction = direction;
        self.phase = Phase::Running;
        true
    }

    /// Gate ticking without touching score or positions
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Idle => Phase::Paused { was_running: false },
            Phase::Running => Phase::Paused { was_running: true },
            Phase::Paused { was_running: true } => Phase::Running,
            Phase::Paused { was_running: false } => Phase::Idle,
        };
    }
}
