use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::constants::{classes, ui};
use crate::document::Control;
use crate::stylesheet::Stylesheet;
use crate::types::NavAction;

/// Screen area of the control for `action`: vertically centred at the edge
/// of `area`. `None` when `area` is too small to hold both controls.
pub fn control_area(area: Rect, action: NavAction) -> Option<Rect> {
    let needed = 2 * (ui::CONTROL_WIDTH + ui::CONTROL_MARGIN);
    if area.width < needed || area.height < ui::CONTROL_HEIGHT {
        return None;
    }
    let y = area.top() + (area.height - ui::CONTROL_HEIGHT) / 2;
    let x = match action {
        NavAction::Previous => area.left() + ui::CONTROL_MARGIN,
        NavAction::Next => area.right() - ui::CONTROL_MARGIN - ui::CONTROL_WIDTH,
    };
    Some(Rect::new(x, y, ui::CONTROL_WIDTH, ui::CONTROL_HEIGHT))
}

/// Draw the document's controls and return where each one landed.
pub fn draw_controls(
    f: &mut Frame,
    controls: &[Control],
    sheet: &Stylesheet,
    area: Rect,
) -> Vec<(Rect, NavAction)> {
    let style = sheet.class_style(classes::NAV_BUTTON);
    let mut placed = Vec::with_capacity(controls.len());

    for control in controls {
        let Some(rect) = control_area(area, control.action) else {
            continue;
        };
        let label = Paragraph::new(vec![Line::raw(""), Line::raw(control.label.as_str())])
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(Clear, rect);
        f.render_widget(label, rect);
        placed.push((rect, control.action));
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_area_edges() {
        let area = Rect::new(0, 0, 80, 21);
        assert_eq!(control_area(area, NavAction::Previous), Some(Rect::new(2, 9, 5, 3)));
        assert_eq!(control_area(area, NavAction::Next), Some(Rect::new(73, 9, 5, 3)));
    }

    #[test]
    fn test_control_area_too_small() {
        assert_eq!(control_area(Rect::new(0, 0, 10, 21), NavAction::Next), None);
        assert_eq!(control_area(Rect::new(0, 0, 80, 2), NavAction::Next), None);
    }
}
