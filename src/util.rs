use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the centered [`consts::DISPLAY_SIZE`]-sized rectangle that
/// everything is drawn inside of.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height]).flex(Flex::Center).areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_area_of_exact_fit() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(get_display_area(area), area);
    }

    #[test]
    fn center_rect_even_margins() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = center_rect(area, Size::new(40, 10));
        assert_eq!(centered, Rect::new(20, 7, 40, 10));
    }
}
