//! Dropdown controller state and state operations.

use crate::emitter::{Callback, EventEmitter};
use crate::error::DropdownError;
use crate::event::DropdownEvent;
use crate::surface::{DropdownOption, InputSurface, ListSurface};

/// Interaction state machine over an input surface and a list surface.
///
/// The controller tracks the committed query (the input text for which the
/// caller last supplied options), the identity payloads of the current row
/// set, and the preselected row. It translates raw input (see the `handle_*`
/// methods) into `change`/`preselect`/`select` notifications published through
/// an owned [`EventEmitter`].
///
/// Typical wiring:
///
/// ```ignore
/// let mut dropdown = Dropdown::attach(input, list);
/// dropdown.on(DropdownEvent::CHANGE, Arc::new(|event| {
///     // fetch options for the new query, then call set_options
/// }));
/// ```
pub struct Dropdown<I: InputSurface, L: ListSurface> {
    emitter: EventEmitter<DropdownEvent>,
    input: I,
    list: L,
    /// Identity payloads of the current row set, in display order.
    values: Vec<String>,
    /// Index of the preselected row in the current row set, if any.
    preselected: Option<usize>,
    /// Input text at the time options were last supplied. `None` after
    /// construction and after `reset`.
    query: Option<String>,
}

impl<I: InputSurface, L: ListSurface> Dropdown<I, L> {
    /// Construction entry point: bind to `input` and take ownership of the
    /// row surface, which starts hidden.
    ///
    /// Placing the list surface next to the input in the host's page/layout
    /// is the host's concern; the host created both surfaces.
    pub fn attach(input: I, mut list: L) -> Self {
        list.set_visible(false);
        log::debug!("[droplist] attached, list hidden");
        Self {
            emitter: EventEmitter::new(),
            input,
            list,
            values: Vec::new(),
            preselected: None,
            query: None,
        }
    }

    // -------------------------------------------------------------------------
    // Emitter delegation
    // -------------------------------------------------------------------------

    /// Subscribe to a dropdown event by name. Chainable.
    pub fn on(&self, name: impl Into<String>, callback: Callback<DropdownEvent>) -> &Self {
        self.emitter.on(name, callback);
        self
    }

    /// Unsubscribe a previously registered callback. Chainable.
    pub fn off(&self, name: &str, callback: &Callback<DropdownEvent>) -> &Self {
        self.emitter.off(name, callback);
        self
    }

    /// Publish an event to current subscribers. Chainable.
    pub fn emit(&self, name: &str, payload: &DropdownEvent) -> &Self {
        self.emitter.emit(name, payload);
        self
    }

    // -------------------------------------------------------------------------
    // State operations
    // -------------------------------------------------------------------------

    /// Move the preselected visual marker to the row at `index`, or clear it.
    ///
    /// Emits `preselect` with the row's value for `Some`, and with no value
    /// when an existing preselection is cleared. Re-preselecting the current
    /// row is idempotent but still re-emits. An out-of-range index is ignored.
    pub fn preselect(&mut self, index: Option<usize>) {
        if let Some(i) = index
            && i >= self.values.len()
        {
            log::debug!(
                "[droplist] preselect index {} out of range ({} rows)",
                i,
                self.values.len()
            );
            return;
        }
        let previous = self.preselected;
        if let Some(prev) = previous {
            self.list.clear_preselected(prev);
        }
        self.preselected = index;
        match index {
            Some(i) => {
                self.list.mark_preselected(i);
                let event = DropdownEvent::Preselect {
                    value: Some(self.values[i].clone()),
                };
                self.emitter.emit(event.name(), &event);
            }
            None => {
                // Only a real clear is worth announcing.
                if previous.is_some() {
                    let event = DropdownEvent::Preselect { value: None };
                    self.emitter.emit(event.name(), &event);
                }
            }
        }
    }

    /// Commit the preselected row as the user's selection, emitting `select`
    /// with its value and index.
    pub fn selected(&self) -> Result<(), DropdownError> {
        let Some(index) = self.preselected else {
            return Err(DropdownError::NothingPreselected);
        };
        let event = DropdownEvent::Select {
            value: self.values[index].clone(),
            index,
        };
        self.emitter.emit(event.name(), &event);
        Ok(())
    }

    /// Compare the input's live text against the committed query and emit
    /// `change` with the live text if they differ.
    ///
    /// Returns whether an event was emitted.
    pub fn changed(&self) -> bool {
        let value = self.input.value();
        if self.query.as_deref() == Some(value.as_str()) {
            return false;
        }
        let event = DropdownEvent::Change { query: value };
        self.emitter.emit(event.name(), &event);
        true
    }

    /// Record `query` as the committed query and wholesale-replace the row
    /// set with `options`, in order.
    ///
    /// The list surface becomes visible iff `options` is non-empty. Any prior
    /// preselection is invalidated; the new set starts with no row preselected.
    pub fn set_options(&mut self, options: Vec<DropdownOption<L::Node>>, query: impl Into<String>) {
        self.query = Some(query.into());
        self.values = options.iter().map(|option| option.value.clone()).collect();
        self.preselected = None;
        let visible = !options.is_empty();
        log::debug!(
            "[droplist] set_options: {} rows, visible={}",
            options.len(),
            visible
        );
        self.list.replace_rows(options);
        self.list.set_visible(visible);
    }

    /// Hide the list surface, clear the committed query, and clear the
    /// preselection along with its visual marker.
    pub fn reset(&mut self) {
        if let Some(prev) = self.preselected.take() {
            self.list.clear_preselected(prev);
        }
        self.list.set_visible(false);
        self.query = None;
        log::trace!("[droplist] reset");
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Index of the preselected row, if any.
    pub fn preselected(&self) -> Option<usize> {
        self.preselected
    }

    /// The committed query, if options have been supplied since the last reset.
    pub fn committed_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Number of rows in the current set.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Identity payload of the row at `index`.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// The bound input surface.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The owned list surface.
    pub fn list(&self) -> &L {
        &self.list
    }
}
