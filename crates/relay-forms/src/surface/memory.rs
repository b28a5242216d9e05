// File: src/surface/memory.rs
// Purpose: Headless surfaces for terminals and tests

use super::{FormSurface, StatusKind, StatusSurface};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct FormState {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    invalid: BTreeSet<String>,
    focused: Option<String>,
    busy: bool,
    busy_changes: Vec<bool>,
}

/// Form held in memory. Unknown fields read as `None`.
#[derive(Debug, Default)]
pub struct MemoryForm {
    state: Mutex<FormState>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with the given fields and values
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let form = Self::new();
        for (field, value) in values {
            form.set_value(field, value);
        }
        form
    }

    /// Simulate typing into a field
    pub fn set_value(&self, field: impl Into<String>, value: impl Into<String>) {
        lock(&self.state).values.insert(field.into(), value.into());
    }

    pub fn error(&self, field: &str) -> Option<String> {
        lock(&self.state).errors.get(field).cloned()
    }

    pub fn errors(&self) -> BTreeMap<String, String> {
        lock(&self.state).errors.clone()
    }

    pub fn focused(&self) -> Option<String> {
        lock(&self.state).focused.clone()
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.state).busy
    }

    /// Every busy toggle in order
    pub fn busy_changes(&self) -> Vec<bool> {
        lock(&self.state).busy_changes.clone()
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: &str) -> Option<String> {
        lock(&self.state).values.get(field).cloned()
    }

    fn set_error(&self, field: &str, message: Option<&str>) {
        let mut state = lock(&self.state);
        match message {
            Some(message) => {
                state.errors.insert(field.to_string(), message.to_string());
            }
            None => {
                state.errors.remove(field);
            }
        }
    }

    fn set_invalid(&self, field: &str, invalid: bool) {
        let mut state = lock(&self.state);
        if invalid {
            state.invalid.insert(field.to_string());
        } else {
            state.invalid.remove(field);
        }
    }

    fn is_invalid(&self, field: &str) -> bool {
        lock(&self.state).invalid.contains(field)
    }

    fn focus(&self, field: &str) {
        lock(&self.state).focused = Some(field.to_string());
    }

    fn set_busy(&self, busy: bool) {
        let mut state = lock(&self.state);
        state.busy = busy;
        state.busy_changes.push(busy);
    }

    fn reset(&self) {
        let mut state = lock(&self.state);
        for value in state.values.values_mut() {
            value.clear();
        }
    }
}

#[derive(Debug, Default)]
struct StatusState {
    current: Option<(StatusKind, String)>,
    focused: bool,
    updates: usize,
}

/// Status region held in memory
#[derive(Debug, Default)]
pub struct MemoryStatus {
    state: Mutex<StatusState>,
}

impl MemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.state).current.as_ref().map(|(_, msg)| msg.clone())
    }

    pub fn kind(&self) -> Option<StatusKind> {
        lock(&self.state).current.as_ref().map(|(kind, _)| *kind)
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.state).focused
    }

    /// Number of times `show` was called
    pub fn updates(&self) -> usize {
        lock(&self.state).updates
    }
}

impl StatusSurface for MemoryStatus {
    fn show(&self, kind: StatusKind, message: &str) {
        let mut state = lock(&self.state);
        state.current = Some((kind, message.to_string()));
        state.focused = false;
        state.updates += 1;
    }

    fn focus(&self) {
        lock(&self.state).focused = true;
    }
}
