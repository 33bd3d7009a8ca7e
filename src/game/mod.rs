mod confetti;
mod engine;
mod heading;
mod snake;
mod swipe;
use self::confetti::Confetti;
use self::engine::{Engine, Phase, StepOutcome};
use self::heading::Heading;
use self::swipe::SwipeTracker;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{seq::IndexedRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// The one screen of the game: it owns the engine and drives it from a
/// tick-or-input loop, and it renders the whole display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    swipe: SwipeTracker,
    confetti: Option<Confetti>,
    confetti_enabled: bool,
    snake_color: Color,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &Config, rng: R) -> Game<R> {
        Game {
            engine: Engine::new_with_rng(config.tick_period(), rng),
            swipe: SwipeTracker::new(config.swipe_threshold()),
            confetti: None,
            confetti_enabled: config.confetti,
            snake_color: consts::SNAKE_PALETTE[0],
            next_tick: None,
        }
    }

    /// Wait for the next tick deadline or the next input event, whichever
    /// comes first.  The deadline is recomputed from the engine's current
    /// tick period every time it fires, so eating (which shortens the
    /// period) restarts the cadence on the spot.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.engine.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.engine.tick_period);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self) {
        let outcome = self.engine.step();
        if let Some(mut confetti) = self.confetti.take() {
            if confetti.tick() {
                self.confetti = Some(confetti);
            }
        }
        match outcome {
            StepOutcome::Ate { celebration } => {
                self.recolor_snake();
                if celebration {
                    self.celebrate();
                }
            }
            StepOutcome::Won => self.celebrate(),
            StepOutcome::Moved | StepOutcome::Died => (),
        }
    }

    fn celebrate(&mut self) {
        if self.confetti_enabled {
            self.confetti = Some(Confetti::burst(&mut self.engine.rng));
        }
    }

    fn recolor_snake(&mut self) {
        if let Some(&color) = consts::SNAKE_PALETTE.choose(&mut self.engine.rng) {
            self.snake_color = color;
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if let Event::Mouse(mev) = &event {
            if self.engine.running() {
                if let Some(heading) = self.swipe.handle_mouse_event(*mev) {
                    self.engine.set_heading(heading);
                }
            }
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match (self.engine.phase, cmd) {
            (_, Command::Quit) => return Some(Screen::Quit),
            (Phase::Running, Command::Up) => self.engine.set_heading(Heading::North),
            (Phase::Running, Command::Down) => self.engine.set_heading(Heading::South),
            (Phase::Running, Command::Left) => self.engine.set_heading(Heading::West),
            (Phase::Running, Command::Right) => self.engine.set_heading(Heading::East),
            (Phase::Dead | Phase::Won, Command::Space) => self.restart(),
            (Phase::Dead | Phase::Won, Command::Q) => return Some(Screen::Quit),
            _ => (),
        }
        None
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.confetti = None;
        self.snake_color = consts::SNAKE_PALETTE[0];
        self.next_tick = None;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn snake_style(&self) -> Style {
        Style::new().fg(self.snake_color).add_modifier(Modifier::BOLD)
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.engine.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: consts::GRID_SIZE + 2,
                height: consts::GRID_SIZE + 2,
            },
        );
        Block::bordered().render(block_area, buf);

        let snake_style = self.snake_style();
        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &p in self.engine.snake.body() {
            board.draw_cell(p, consts::SNAKE_BODY_SYMBOL, snake_style);
        }
        if let Some(pos) = self.engine.food {
            board.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.engine.phase == Phase::Dead {
            board.draw_cell(
                self.engine.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.engine.snake.head(),
                self.engine.heading.head_symbol(),
                snake_style,
            );
        }
        if let Some(ref confetti) = self.confetti {
            for (pos, symbol, style) in confetti.cells() {
                board.draw_cell(pos, symbol, style);
            }
        }

        match self.engine.phase {
            Phase::Running => (),
            Phase::Dead => {
                Span::from(" — GAME OVER —").render(msg1_area, buf);
                retry_line().render(msg2_area, buf);
            }
            Phase::Won => {
                Span::from(" — YOU WIN — the board is full!").render(msg1_area, buf);
                retry_line().render(msg2_area, buf);
            }
        }
    }
}

fn retry_line() -> Line<'static> {
    Line::from_iter([
        Span::raw(" Retry ("),
        Span::styled("Space", consts::KEY_STYLE),
        Span::raw(") — Quit ("),
        Span::styled("q", consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: ratatui::layout::Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::snake::Snake;
    use super::*;
    use crossterm::event::KeyCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::layout::Position;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(&Config::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn draw_new_game() {
        let mut game = new_game();
        game.engine.food = Some(Position::new(3, 4));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0",
            "",
            "",
            "                                ┌───────────────┐                               ",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │   ●           │",
            "                                │               │",
            "                                │               │",
            "                                │       >       │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                └───────────────┘",
            "",
            "",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(40, 11, 1, 1), game.snake_style());
        expected.set_style(Rect::new(36, 8, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_game_over() {
        let mut game = new_game();
        game.engine.score = 4;
        game.engine.snake = Snake {
            head: Position::new(5, 5),
            body: VecDeque::from([
                Position::new(4, 5),
                Position::new(6, 5),
                Position::new(4, 6),
                Position::new(5, 6),
                Position::new(6, 6),
            ]),
            target_len: 6,
        };
        game.engine.food = Some(Position::new(12, 1));
        game.engine.phase = Phase::Dead;
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 4",
            "",
            "",
            "                                ┌───────────────┐                               ",
            "                                │               │",
            "                                │            ●  │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │    ⚬×⚬        │",
            "                                │    ⚬⚬⚬        │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                │               │",
            "                                └───────────────┘",
            "",
            "",
            " — GAME OVER —",
            " Retry (Space) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(45, 5, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(37, 9, 1, 1), game.snake_style());
        expected.set_style(Rect::new(38, 9, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(39, 9, 1, 1), game.snake_style());
        expected.set_style(Rect::new(37, 10, 3, 1), game.snake_style());
        expected.set_style(Rect::new(8, 23, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(23, 23, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn arrow_key_buffers_heading() {
        let mut game = new_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Up.into()))
            .is_none());
        assert_eq!(game.engine.pending, Some(Heading::North));
    }

    #[test]
    fn space_restarts_after_death() {
        let mut game = new_game();
        game.engine.snake = Snake::new(Position::new(0, 7));
        game.engine.heading = Heading::West;
        // Space does nothing while the game is running
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.engine.phase, Phase::Running);
        game.tick();
        assert_eq!(game.engine.phase, Phase::Dead);
        assert!(game
            .handle_event(Event::Key(KeyCode::Char(' ').into()))
            .is_none());
        assert_eq!(game.engine.phase, Phase::Running);
        assert_eq!(game.engine.snake.head(), Position::new(7, 7));
        assert_eq!(game.engine.score, 0);
        assert_eq!(game.snake_color, consts::SNAKE_PALETTE[0]);
        assert_eq!(game.confetti, None);
    }

    #[test]
    fn q_quits_only_when_game_is_over() {
        let mut game = new_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Char('q').into()))
            .is_none());
        game.engine.phase = Phase::Dead;
        assert!(matches!(
            game.handle_event(Event::Key(KeyCode::Char('q').into())),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn celebration_spawns_and_decays_confetti() {
        let mut game = new_game();
        game.engine.score = 9;
        game.engine.food = Some(Position::new(8, 7));
        game.tick();
        assert_eq!(game.engine.score, 10);
        assert!(game.confetti.is_some());
        // The burst goes away on its own after enough ticks
        for _ in 0..consts::CONFETTI_TICKS {
            game.tick();
        }
        assert_eq!(game.confetti, None);
    }

    #[test]
    fn confetti_can_be_disabled() {
        let mut config = Config::default();
        config.confetti = false;
        let mut game = Game::new_with_rng(&config, ChaCha12Rng::seed_from_u64(RNG_SEED));
        game.engine.score = 9;
        game.engine.food = Some(Position::new(8, 7));
        game.tick();
        assert_eq!(game.engine.score, 10);
        assert_eq!(game.confetti, None);
    }
}
