//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width & height of the board, in cells
pub(crate) const GRID_SIZE: u16 = 15;

/// Default time between movements of the snake at the start of a game, in
/// milliseconds
pub(crate) const INITIAL_TICK_MS: u64 = 200;

/// Default time between movements of the snake at the start of a game
pub(crate) const INITIAL_TICK_PERIOD: Duration = Duration::from_millis(INITIAL_TICK_MS);

/// Each piece of food eaten multiplies the tick period by this much
pub(crate) const SPEEDUP_FACTOR: f64 = 0.985;

/// The tick period never drops below this
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(40);

/// A celebration fires whenever the score reaches a positive multiple of this
pub(crate) const CELEBRATION_STEP: u32 = 10;

/// How many ticks a confetti burst stays on screen
pub(crate) const CONFETTI_TICKS: u32 = 12;

/// Number of particles in a confetti burst
pub(crate) const CONFETTI_PARTICLES: usize = 60;

/// Default dominant-axis drag distance (in cells) that registers as a swipe
pub(crate) const SWIPE_THRESHOLD: u16 = 8;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Glyphs confetti particles are drawn with
pub(crate) const CONFETTI_SYMBOLS: [char; 4] = ['*', '✦', '•', '❉'];

/// Colors the snake can take on; a new one is picked whenever it eats
pub(crate) const SNAKE_PALETTE: [Color; 6] = [
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Colors confetti particles are drawn in
pub(crate) const CONFETTI_PALETTE: [Color; 5] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightBlue,
    Color::LightMagenta,
];

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
