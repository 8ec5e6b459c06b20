//! Input-event vocabulary and the events the dropdown emits.

/// Simplified key representation fed into the dropdown's dispatch methods.
///
/// Hosts running on a terminal can convert from crossterm key codes directly;
/// other hosts construct these by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// A key this vocabulary does not model.
    Unknown,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Unknown,
        }
    }
}

/// Result of handling an input event.
///
/// `Consumed` tells the host to suppress the event's default action (for a
/// browser-like host, `preventDefault`; for a focus system, stop propagation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not acted on; the host may let it propagate.
    Ignored,
    /// Event was handled; suppress the default action.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A notification emitted by the dropdown through its event emitter.
///
/// Each variant is published under a fixed event name (see the associated
/// constants), so subscribers can register for exactly the notifications they
/// care about and match on the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The live input text diverged from the committed query.
    Change { query: String },
    /// Preselection moved to a row (`Some`) or was cleared (`None`).
    Preselect { value: Option<String> },
    /// The user committed the preselected row.
    Select { value: String, index: usize },
}

impl DropdownEvent {
    /// Event name for [`DropdownEvent::Change`].
    pub const CHANGE: &'static str = "change";
    /// Event name for [`DropdownEvent::Preselect`].
    pub const PRESELECT: &'static str = "preselect";
    /// Event name for [`DropdownEvent::Select`].
    pub const SELECT: &'static str = "select";

    /// The name this event is published under.
    pub fn name(&self) -> &'static str {
        match self {
            DropdownEvent::Change { .. } => Self::CHANGE,
            DropdownEvent::Preselect { .. } => Self::PRESELECT,
            DropdownEvent::Select { .. } => Self::SELECT,
        }
    }
}
