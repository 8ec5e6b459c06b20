pub mod dropdown;
pub mod emitter;
pub mod error;
pub mod event;
pub mod surface;

pub use dropdown::{Dropdown, DropdownItem};
pub use emitter::{Callback, EventEmitter};
pub use error::DropdownError;
pub use event::{DropdownEvent, EventResult, Key};
pub use surface::{DropdownOption, InputSurface, Label, ListSurface};
