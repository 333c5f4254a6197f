//! Mapping from input keys to dispatchable actions.

use crossterm::event::KeyCode;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyMapError {
    #[error("key {0:?} is already bound")]
    DuplicateKey(KeyCode),
}

struct Binding<A> {
    key: KeyCode,
    label: String,
    action: A,
}

/// Ordered key-to-action bindings.
///
/// Lookup takes the first binding whose key matches; unbound keys
/// dispatch to nothing. Registration order would therefore decide which
/// of two duplicate bindings wins, so duplicates are rejected outright
/// instead of being silently shadowed.
pub struct KeyMap<A> {
    bindings: Vec<Binding<A>>,
}

impl<A> KeyMap<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind(
        &mut self,
        key: KeyCode,
        label: impl Into<String>,
        action: A,
    ) -> Result<(), KeyMapError> {
        if self.bindings.iter().any(|b| b.key == key) {
            return Err(KeyMapError::DuplicateKey(key));
        }
        self.bindings.push(Binding {
            key,
            label: label.into(),
            action,
        });
        Ok(())
    }

    /// First matching action for `key`, or `None` for an unbound key.
    pub fn dispatch(&self, key: KeyCode) -> Option<&A> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| &b.action)
    }

    /// One-line help text listing every labelled binding, in
    /// registration order. Bindings registered with an empty label
    /// share the label of a sibling and are skipped.
    pub fn legend(&self) -> String {
        self.bindings
            .iter()
            .filter(|b| !b.label.is_empty())
            .map(|b| b.label.as_str())
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl<A> Default for KeyMap<A> {
    fn default() -> Self {
        Self::new()
    }
}
