//! Input dispatch for the dropdown.
//!
//! The host routes raw input here: key press/release from the bound input
//! surface, focus transitions, and pointer events hit-tested against the
//! list surface's rows. `EventResult::Consumed` tells the host to suppress
//! the event's default action.

use crate::event::{EventResult, Key};
use crate::surface::{InputSurface, ListSurface};

use super::Dropdown;

impl<I: InputSurface, L: ListSurface> Dropdown<I, L> {
    /// Handle a key press on the input surface.
    ///
    /// Enter is swallowed (so the host form does not submit). Up and Down
    /// move the preselection without wrapping: Down with nothing preselected
    /// starts at the first row, Up with nothing preselected does nothing.
    pub fn handle_key_down(&mut self, key: Key) -> EventResult {
        match key {
            Key::Enter => EventResult::Consumed,
            Key::Up => {
                if let Some(index) = self.preselected()
                    && index > 0
                {
                    self.preselect(Some(index - 1));
                }
                EventResult::Consumed
            }
            Key::Down => {
                match self.preselected() {
                    Some(index) if index + 1 < self.row_count() => {
                        self.preselect(Some(index + 1));
                    }
                    Some(_) => {}
                    None => {
                        if self.row_count() > 0 {
                            self.preselect(Some(0));
                        }
                    }
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a key release on the input surface.
    ///
    /// Enter commits the preselected row and resets the control. Any other
    /// key re-evaluates the live text against the committed query, emitting
    /// `change` if it diverged; arrow keys never reach this emission because
    /// they do not alter the text.
    pub fn handle_key_up(&mut self, key: Key) -> EventResult {
        match key {
            Key::Enter => {
                if let Err(err) = self.selected() {
                    log::debug!("[droplist] enter released with {err}");
                }
                self.reset();
                EventResult::Consumed
            }
            _ => {
                if self.changed() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    /// The input surface gained focus: same divergence check as a key
    /// release, so tabbing into an unchanged field still re-opens the list.
    ///
    /// Returns whether a `change` event was emitted.
    pub fn handle_focus(&self) -> bool {
        self.changed()
    }

    /// The input surface lost focus: hide the list and clear the committed
    /// query and preselection.
    pub fn handle_blur(&mut self) {
        self.reset();
    }

    /// Pointer hover over the row at `index`: preselect it.
    pub fn handle_row_hover(&mut self, index: usize) -> EventResult {
        if index < self.row_count() {
            self.preselect(Some(index));
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Pointer press on the row at `index`: preselect it, then commit it.
    ///
    /// Does not reset; the host delivers `handle_blur` when focus actually
    /// leaves the input.
    pub fn handle_row_press(&mut self, index: usize) -> EventResult {
        if index >= self.row_count() {
            return EventResult::Ignored;
        }
        self.preselect(Some(index));
        // The row was just preselected, so this cannot fail.
        let _ = self.selected();
        EventResult::Consumed
    }

    /// Pointer left the list surface entirely: clear the preselection.
    pub fn handle_pointer_leave(&mut self) {
        self.preselect(None);
    }
}
