use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

const FOOTER_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 15;
const PANEL_WIDTH: u16 = 24;

/// Screen regions for the counter component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRegions {
    pub display: Rect,
    pub button: Rect,
}

/// Split the screen into body and (optional) footer.
pub fn layout_regions(area: Rect, show_footer: bool) -> (Rect, Rect) {
    let footer_height = if show_footer {
        FOOTER_HEIGHT.min(area.height)
    } else {
        0
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

/// Place the display above the button, centred in `body`.
pub fn counter_regions(body: Rect) -> CounterRegions {
    let panel = centered_rect_by_size(body, PANEL_WIDTH, DISPLAY_HEIGHT + BUTTON_HEIGHT);
    let [display, button_row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(panel);
    let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .areas(button_row);
    CounterRegions { display, button }
}

/// Where the increment button lands for a full-screen `area`.
pub fn button_rect(area: Rect, show_footer: bool) -> Rect {
    let (body, _) = layout_regions(area, show_footer);
    counter_regions(body).button
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn footer_takes_bottom_rows() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24), true);
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
        assert_eq!(body, Rect::new(0, 0, 80, 21));
    }

    #[test]
    fn hidden_footer_gives_body_everything() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24), false);
        assert_eq!(body, Rect::new(0, 0, 80, 24));
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn button_sits_below_display() {
        let regions = counter_regions(Rect::new(0, 0, 80, 21));
        assert!(regions.button.y >= regions.display.y + regions.display.height);
        assert_eq!(regions.button.width, BUTTON_WIDTH);
        assert_eq!(regions.button.height, BUTTON_HEIGHT);
    }

    #[test]
    fn button_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let button = button_rect(area, true);
        assert!(area.contains(Position::new(button.x, button.y)));
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let regions = counter_regions(Rect::new(0, 0, 4, 2));
        assert!(regions.display.width <= 4);
        assert!(regions.button.height <= 2);
    }
}
