//! Generic named-event publish/subscribe registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A subscriber callback.
///
/// Callbacks capture whatever context they need at registration time.
/// Identity (for [`EventEmitter::off`]) is the `Arc` allocation, so keep a
/// clone of the handle around if you intend to unsubscribe later.
pub type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

fn same_callback<E>(a: &Callback<E>, b: &Callback<E>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Per-instance mapping from event name to an ordered list of subscribers.
///
/// Subscribers fire in registration order. The same callback may be registered
/// more than once and fires once per registration. Every failure mode here is
/// a silent no-op: unknown names, unknown callbacks, and emissions with no
/// subscribers never raise.
pub struct EventEmitter<E> {
    listeners: RwLock<HashMap<String, Vec<Callback<E>>>>,
}

impl<E> EventEmitter<E> {
    /// Create an emitter with no subscribers.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Register `callback` under `name`, appending to that name's list.
    ///
    /// Does not deduplicate. Chainable.
    pub fn on(&self, name: impl Into<String>, callback: Callback<E>) -> &Self {
        if let Ok(mut guard) = self.listeners.write() {
            guard.entry(name.into()).or_default().push(callback);
        }
        self
    }

    /// Remove the first subscriber under `name` that is the same allocation
    /// as `callback`.
    ///
    /// Removes at most one record per call. Unknown names and callbacks are
    /// silent no-ops. Chainable.
    pub fn off(&self, name: &str, callback: &Callback<E>) -> &Self {
        if let Ok(mut guard) = self.listeners.write()
            && let Some(list) = guard.get_mut(name)
            && let Some(pos) = list.iter().position(|cb| same_callback(cb, callback))
        {
            list.remove(pos);
        }
        self
    }

    /// Invoke every subscriber registered under `name`, in registration order,
    /// passing `payload`.
    ///
    /// The subscriber list is snapshotted before iterating, so a callback that
    /// calls `on`/`off` re-entrantly never skips or double-invokes a subscriber
    /// present at emission start. Chainable.
    pub fn emit(&self, name: &str, payload: &E) -> &Self {
        let snapshot = match self.listeners.read() {
            Ok(guard) => guard.get(name).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        log::trace!("[emitter] emit '{}' to {} subscribers", name, snapshot.len());
        for callback in snapshot {
            callback(payload);
        }
        self
    }

    /// Number of subscribers currently registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .read()
            .map(|guard| guard.get(name).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        if let Ok(guard) = self.listeners.read() {
            for (name, list) in guard.iter() {
                map.entry(name, &list.len());
            }
        }
        map.finish()
    }
}
