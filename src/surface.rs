//! Boundary traits for the surfaces the dropdown drives.
//!
//! The controller never renders anything itself. The host supplies an input
//! surface (readable text value) and a list surface (the floating row
//! container); the controller drives the list surface through the narrow
//! methods below and the host routes raw input back into the controller's
//! `handle_*` methods.

/// Content of a row's label: plain text, or an opaque renderable node the
/// host's surface knows how to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label<N> {
    Text(String),
    Node(N),
}

/// A selectable row: a label plus an opaque string value used as the row's
/// identity payload in `preselect`/`select` notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption<N> {
    pub label: Label<N>,
    pub value: String,
}

impl<N> DropdownOption<N> {
    /// Row with a plain-text label.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Label::Text(label.into()),
            value: value.into(),
        }
    }

    /// Row with a host-rendered label node.
    pub fn node(node: N, value: impl Into<String>) -> Self {
        Self {
            label: Label::Node(node),
            value: value.into(),
        }
    }
}

/// The text input the dropdown is bound to.
pub trait InputSurface {
    /// Current text content of the input.
    fn value(&self) -> String;
}

/// The floating container of selectable rows.
///
/// Row replacement is wholesale: `replace_rows` destroys the previous row set
/// and builds the new one in the supplied order, with no visual marker carried
/// over. The controller guarantees at most one row is marked at a time.
pub trait ListSurface {
    /// Host-specific renderable node type for custom row labels.
    type Node;

    /// Replace the entire row set, in order. New rows carry no marker.
    fn replace_rows(&mut self, rows: Vec<DropdownOption<Self::Node>>);

    /// Show or hide the container.
    fn set_visible(&mut self, visible: bool);

    /// Apply the preselected visual marker to the row at `index`.
    fn mark_preselected(&mut self, index: usize);

    /// Remove the preselected visual marker from the row at `index`.
    fn clear_preselected(&mut self, index: usize);
}
