//! List selection helpers for the card list.

use ratatui::widgets::ListState;

/// Extension methods on `ListState` for a list of `total_items` rows.
pub trait ListStateExt {
    /// Move up, wrapping from the first item to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Move down, wrapping from the last item to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Keep the selection valid after the list changed length.
    fn clamp_to(&mut self, total_items: usize);
}

impl ListStateExt for ListState {
    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some((current + total_items - 1) % total_items));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let next = match self.selected() {
            Some(current) => (current.min(total_items - 1) + 1) % total_items,
            None => 0,
        };
        self.select(Some(next));
    }

    fn clamp_to(&mut self, total_items: usize) {
        match (self.selected(), total_items) {
            (_, 0) => self.select(None),
            (None, _) => self.select(Some(0)),
            (Some(current), n) if current >= n => self.select(Some(n - 1)),
            _ => {}
        }
    }
}
