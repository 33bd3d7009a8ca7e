use super::heading::Heading;
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// The game-state engine: it owns the snake, the food, the score, and the
/// tick period, and it is the only thing that mutates them.  Directional
/// input is buffered as a pending heading and adopted at the next
/// [`step()`][Engine::step], so render-visible state only ever changes at
/// tick boundaries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Engine<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) snake: Snake,
    pub(super) food: Option<Position>,
    pub(super) heading: Heading,
    pub(super) pending: Option<Heading>,
    pub(super) score: u32,
    pub(super) tick_period: Duration,
    pub(super) phase: Phase,
    initial_tick_period: Duration,
}

impl<R: Rng> Engine<R> {
    pub(super) fn new_with_rng(tick_period: Duration, mut rng: R) -> Engine<R> {
        let snake = Snake::new(Position::new(consts::GRID_SIZE / 2, consts::GRID_SIZE / 2));
        let food = place_food(&snake, &mut rng);
        Engine {
            rng,
            snake,
            food,
            heading: Heading::East,
            pending: None,
            score: 0,
            tick_period,
            phase: Phase::Running,
            initial_tick_period: tick_period,
        }
    }

    /// Buffer a direction change to take effect on the next tick.  Ignored
    /// when the game is over, and ignored when it would reverse the snake on
    /// the spot.
    pub(super) fn set_heading(&mut self, heading: Heading) {
        if self.phase != Phase::Running || heading == self.heading.reverse() {
            return;
        }
        self.pending = Some(heading);
    }

    /// Advance the game by one tick.
    pub(super) fn step(&mut self) -> StepOutcome {
        match self.phase {
            Phase::Running => (),
            Phase::Dead => return StepOutcome::Died,
            Phase::Won => return StepOutcome::Won,
        }
        if let Some(heading) = self.pending.take() {
            self.heading = heading;
        }
        // Wall collision first: `advance` bails before any body lookup.
        let Some(new_head) = self.heading.advance(self.snake.head()) else {
            self.phase = Phase::Dead;
            return StepOutcome::Died;
        };
        if self.snake.occupies(new_head) {
            self.phase = Phase::Dead;
            return StepOutcome::Died;
        }
        if self.food == Some(new_head) {
            self.snake.grow();
            self.snake.advance_to(new_head);
            self.score += 1;
            self.tick_period = self
                .tick_period
                .mul_f64(consts::SPEEDUP_FACTOR)
                .max(consts::MIN_TICK_PERIOD);
            self.food = place_food(&self.snake, &mut self.rng);
            if self.food.is_none() {
                // Nowhere left to put food: the board is full.
                self.phase = Phase::Won;
                return StepOutcome::Won;
            }
            StepOutcome::Ate {
                celebration: self.score % consts::CELEBRATION_STEP == 0,
            }
        } else {
            self.snake.advance_to(new_head);
            StepOutcome::Moved
        }
    }

    /// Start the game over from the initial state.
    pub(super) fn reset(&mut self) {
        self.snake = Snake::new(Position::new(consts::GRID_SIZE / 2, consts::GRID_SIZE / 2));
        self.heading = Heading::East;
        self.pending = None;
        self.score = 0;
        self.tick_period = self.initial_tick_period;
        self.phase = Phase::Running;
        self.food = place_food(&self.snake, &mut self.rng);
    }
}

impl<R> Engine<R> {
    pub(super) fn running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Pick a food cell uniformly at random from the cells the snake does not
/// occupy.  Returns `None` only when the snake covers the whole board.
fn place_food<R: Rng>(snake: &Snake, rng: &mut R) -> Option<Position> {
    Rect::new(0, 0, consts::GRID_SIZE, consts::GRID_SIZE)
        .positions()
        .filter(|&p| !snake.occupies(p))
        .choose(rng)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Phase {
    Running,
    /// The snake hit a wall or itself.
    Dead,
    /// The snake has filled the board and there is nowhere left to place
    /// food.
    Won,
}

/// What a single tick did, so the screen can redraw and fire side effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum StepOutcome {
    /// The snake moved to an empty cell.
    Moved,
    /// The snake ate the food and grew.  `celebration` is set when the new
    /// score is a positive multiple of [`consts::CELEBRATION_STEP`]; it is
    /// reported exactly once per crossing.
    Ate { celebration: bool },
    /// The snake hit a wall or itself.
    Died,
    /// The snake filled the board.
    Won,
}
