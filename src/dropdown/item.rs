//! DropdownItem trait for sources that can populate a dropdown.

use crate::surface::{DropdownOption, InputSurface, ListSurface};

use super::Dropdown;

/// Trait for items that can be turned into plain-text dropdown rows.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl DropdownItem for Country {
///     fn item_value(&self) -> String {
///         self.code.clone()
///     }
///
///     fn item_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait DropdownItem {
    /// Identity payload carried by `preselect`/`select` notifications.
    fn item_value(&self) -> String;

    /// Display text for the row.
    fn item_label(&self) -> String;
}

impl DropdownItem for String {
    fn item_value(&self) -> String {
        self.clone()
    }

    fn item_label(&self) -> String {
        self.clone()
    }
}

impl DropdownItem for &str {
    fn item_value(&self) -> String {
        (*self).to_string()
    }

    fn item_label(&self) -> String {
        (*self).to_string()
    }
}

// Implement for (value, label) tuples
impl<S1, S2> DropdownItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn item_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn item_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

impl<I: InputSurface, L: ListSurface> Dropdown<I, L> {
    /// Convenience over [`Dropdown::set_options`] for plain-text sources.
    pub fn set_items<T: DropdownItem>(&mut self, items: &[T], query: impl Into<String>) {
        let options = items
            .iter()
            .map(|item| DropdownOption::text(item.item_label(), item.item_value()))
            .collect();
        self.set_options(options, query);
    }
}
