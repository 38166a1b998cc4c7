use ratatui::prelude::*;

/// Split a screen into header, content, and footer rows.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A rectangle of the given size centered in `area`, clamped to fit.
pub fn center_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
    }

    #[test]
    fn test_center_popup_clamps() {
        let popup = center_popup(Rect::new(0, 0, 40, 10), 60, 6);
        assert_eq!(popup, Rect::new(0, 2, 40, 6));
    }
}
