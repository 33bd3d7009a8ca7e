use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, with the most
    /// recent at the end.  The head is not included.
    pub(super) body: VecDeque<Position>,

    /// The number of cells the snake should occupy, counting the head
    pub(super) target_len: usize,
}

impl Snake {
    /// Create a new single-cell snake with its head at `head`
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            target_len: 1,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells in the snake's body (head excluded)
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Total number of cells the snake currently occupies
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Move the head to `pos`, trimming the tail unless the snake has been
    /// given room to grow.
    pub(super) fn advance_to(&mut self, pos: Position) {
        self.body.push_back(self.head);
        self.head = pos;
        while self.body.len() + 1 > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Lengthen the snake by one cell in response to eating
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }
}
