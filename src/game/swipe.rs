use super::heading::Heading;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Turns mouse press-drag-release gestures into directional input, the
/// terminal analogue of a touch swipe.
///
/// A gesture begins on a left-button press.  Once the drag's displacement on
/// its dominant axis reaches the threshold, the gesture yields that
/// direction, and nothing more until the button is released and pressed
/// again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct SwipeTracker {
    threshold: u16,
    gesture: Option<Gesture>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Gesture {
    origin: (u16, u16),
    fired: bool,
}

impl SwipeTracker {
    pub(super) fn new(threshold: u16) -> SwipeTracker {
        SwipeTracker {
            threshold,
            gesture: None,
        }
    }

    pub(super) fn handle_mouse_event(&mut self, ev: MouseEvent) -> Option<Heading> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.gesture = Some(Gesture {
                    origin: (ev.column, ev.row),
                    fired: false,
                });
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let gesture = self.gesture.as_mut().filter(|g| !g.fired)?;
                let dx = i32::from(ev.column) - i32::from(gesture.origin.0);
                let dy = i32::from(ev.row) - i32::from(gesture.origin.1);
                if dx.abs().max(dy.abs()) < i32::from(self.threshold) {
                    return None;
                }
                gesture.fired = true;
                // Ties go to the horizontal axis
                Some(if dx.abs() >= dy.abs() {
                    if dx > 0 {
                        Heading::East
                    } else {
                        Heading::West
                    }
                } else if dy > 0 {
                    Heading::South
                } else {
                    Heading::North
                })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.gesture = None;
                None
            }
            _ => None,
        }
    }
}
