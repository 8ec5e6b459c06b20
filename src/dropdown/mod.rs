//! Dropdown controller - a text input augmented with a floating list of
//! selectable rows, populated by the caller and navigated by the user.

mod events;
mod item;
mod state;

pub use item::DropdownItem;
pub use state::Dropdown;
