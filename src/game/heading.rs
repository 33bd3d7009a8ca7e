use crate::consts;
use ratatui::layout::Position;

/// The direction the snake travels in: always one of the four unit vectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Move `pos` one cell in this heading.  Returns `None` if that would
    /// leave the board.
    pub(super) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Heading::North => y = y.checked_sub(1)?,
            Heading::East => x = x.checked_add(1).filter(|&x2| x2 < consts::GRID_SIZE)?,
            Heading::South => y = y.checked_add(1).filter(|&y2| y2 < consts::GRID_SIZE)?,
            Heading::West => x = x.checked_sub(1)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(self) -> char {
        match self {
            Heading::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Heading::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Heading::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Heading::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}
