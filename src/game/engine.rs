use super::{
    board::{Board, Cell},
    config::GameConfig,
    direction::{Direction, InputFrame},
};
use rand::Rng;
use std::time::Instant;

/// The simulation engine owning all game state.
///
/// The engine holds the board, the snake body, the food cell, the current
/// heading and the tick gate. It has no I/O of its own: the mode loop samples
/// input into it, polls it with the current time, and reads it back out to
/// draw. A fatal collision is not an error but a state transition — the game
/// restarts immediately, there is no terminal dead state.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    /// Body segment indices, head at position 0; never empty
    snake: Vec<usize>,
    food: usize,
    heading: Option<Direction>,
    /// Timestamp of the last executed step
    last_step: Instant,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new engine with the given configuration, ready to play
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let board = Board::new(config.grid_size);
        let mut engine = Self {
            config,
            board,
            snake: Vec::new(),
            food: 0,
            heading: None,
            last_step: now,
            rng: rand::thread_rng(),
        };
        engine.reset(now);
        engine
    }

    /// Restart the game: empty board, length-1 snake at the start cell, food
    /// at its start cell, no heading, tick gate re-armed to `now`.
    ///
    /// Called at startup and on every fatal collision. Idempotent.
    pub fn reset(&mut self, now: Instant) {
        self.board.clear();

        let start = self
            .board
            .to_index(self.config.snake_start.0, self.config.snake_start.1);
        self.snake.clear();
        self.snake.push(start);
        self.board.set(start, Cell::Snake);

        self.food = self
            .board
            .to_index(self.config.food_start.0, self.config.food_start.1);
        self.board.set(self.food, Cell::Food);

        self.heading = None;
        self.last_step = now;
    }

    /// Apply one frame of sampled input to the heading.
    ///
    /// Directions are considered in the order Up, Right, Down, Left; the
    /// first pressed one that is not a 180-degree reversal of the current
    /// heading wins. Reversals are rejected because they would drive the head
    /// straight into the second body segment.
    pub fn apply_input(&mut self, frame: InputFrame) {
        for requested in frame.pressed() {
            let reversal = self
                .heading
                .is_some_and(|current| current.is_opposite(requested));
            if !reversal {
                self.heading = Some(requested);
                return;
            }
        }
    }

    /// Index the head would move to under the current heading.
    ///
    /// Pure index arithmetic: it neither wraps at board edges nor validates
    /// bounds, so the caller must rule out a wall collision first. With no
    /// heading the head stays put.
    pub fn next_head_index(&self) -> usize {
        let head = self.snake[0];
        let n = self.board.size();
        match self.heading {
            Some(Direction::Up) => head.wrapping_sub(n),
            Some(Direction::Right) => head + 1,
            Some(Direction::Down) => head + n,
            Some(Direction::Left) => head.wrapping_sub(1),
            None => head,
        }
    }

    /// True iff moving in the current heading would cross the board edge.
    ///
    /// This check must come before the index arithmetic: a flattened index
    /// stepped over an edge lands on a valid-looking cell on the opposite
    /// side, so out-of-bounds moves would otherwise pass for legal ones.
    pub fn wall_collision(&self) -> bool {
        let head = self.snake[0];
        let n = self.board.size();
        match self.heading {
            Some(Direction::Up) => head < n,
            Some(Direction::Right) => head % n == n - 1,
            Some(Direction::Down) => head / n == n - 1,
            Some(Direction::Left) => head % n == 0,
            None => false,
        }
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Hitting a wall or the snake's own body restarts the game. Moving onto
    /// the food grows the snake by one segment and respawns the food. The
    /// board is kept exactly in sync with the body on every path.
    pub fn step(&mut self, now: Instant) {
        if self.heading.is_none() {
            // No heading yet, nothing moves
            return;
        }

        if self.wall_collision() {
            self.reset(now);
            return;
        }

        let next = self.next_head_index();

        // Checked before the tail vacates: moving into the cell the tail is
        // about to leave is still a fatal collision
        if self.board.get(next) == Cell::Snake {
            self.reset(now);
            return;
        }

        let ate = next == self.food;
        if ate {
            self.board.set(self.food, Cell::Empty);
        } else if let Some(tail) = self.snake.pop() {
            self.board.set(tail, Cell::Empty);
        }

        self.snake.insert(0, next);
        self.board.set(next, Cell::Snake);

        if ate {
            self.spawn_food(next);
        }
    }

    /// Poll the tick gate: run one step if the tick interval has elapsed
    /// since the last one. Returns whether a step ran.
    ///
    /// The gate decouples the simulation rate from the render frame rate; the
    /// mode loop calls this once per frame with the current time.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.last_step + self.config.tick_interval < now {
            self.last_step = now;
            self.step(now);
            true
        } else {
            false
        }
    }

    /// Place new food on a uniformly random free cell.
    ///
    /// Candidates on the snake, on the previous food cell, or equal to the
    /// head are redrawn. The upper bound is exclusive so every draw is a
    /// valid index.
    fn spawn_food(&mut self, prev_food: usize) {
        loop {
            let candidate = self.rng.gen_range(0..self.board.area());
            debug_assert!(candidate < self.board.area());

            if self.board.get(candidate) == Cell::Snake
                || candidate == self.snake[0]
                || candidate == prev_food
            {
                continue;
            }

            self.food = candidate;
            self.board.set(candidate, Cell::Food);
            return;
        }
    }

    /// The occupancy board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Body segment indices, head first
    pub fn snake(&self) -> &[usize] {
        &self.snake
    }

    /// Current head index
    pub fn head(&self) -> usize {
        self.snake[0]
    }

    /// Current food index
    pub fn food(&self) -> usize {
        self.food
    }

    /// Current heading, `None` until the first directional input after a reset
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    #[cfg(test)]
    fn place_snake(&mut self, body: &[usize], heading: Direction) {
        assert!(!body.is_empty());
        for &segment in &self.snake {
            self.board.set(segment, Cell::Empty);
        }
        self.snake = body.to_vec();
        for &segment in body {
            self.board.set(segment, Cell::Snake);
        }
        self.heading = Some(heading);
    }

    #[cfg(test)]
    fn place_food(&mut self, index: usize) {
        self.board.set(self.food, Cell::Empty);
        self.food = index;
        self.board.set(index, Cell::Food);
    }
}
