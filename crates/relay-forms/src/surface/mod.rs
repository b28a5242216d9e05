//! UI surfaces the pipeline drives
//!
//! A surface is whatever renders the form: DOM elements in a browser, a
//! terminal prompt, or the in-memory doubles in [`memory`]. Methods take
//! `&self` because UI handles are shared; implementations own their interior
//! mutability.

pub mod memory;

pub use memory::{MemoryForm, MemoryStatus};

/// Kind of status message, used for styling and `role` attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Named input fields, their error slots and the submit control
pub trait FormSurface: Send + Sync {
    /// Current raw value of a field, `None` if the form has no such field
    fn value(&self, field: &str) -> Option<String>;

    /// Write the error slot for a field; `None` clears it
    fn set_error(&self, field: &str, message: Option<&str>);

    /// Toggle the accessibility invalid marker (`aria-invalid`)
    fn set_invalid(&self, field: &str, invalid: bool);

    fn is_invalid(&self, field: &str) -> bool;

    fn focus(&self, field: &str);

    /// Disable the submit control and show it as busy, or restore it
    fn set_busy(&self, busy: bool);

    /// Empty every field
    fn reset(&self);
}

/// The region that announces the form's status
pub trait StatusSurface: Send + Sync {
    fn show(&self, kind: StatusKind, message: &str);

    /// Move focus to the status region so screen readers announce it
    fn focus(&self);
}

impl<T: FormSurface + ?Sized> FormSurface for std::sync::Arc<T> {
    fn value(&self, field: &str) -> Option<String> {
        (**self).value(field)
    }

    fn set_error(&self, field: &str, message: Option<&str>) {
        (**self).set_error(field, message)
    }

    fn set_invalid(&self, field: &str, invalid: bool) {
        (**self).set_invalid(field, invalid)
    }

    fn is_invalid(&self, field: &str) -> bool {
        (**self).is_invalid(field)
    }

    fn focus(&self, field: &str) {
        (**self).focus(field)
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl<T: StatusSurface + ?Sized> StatusSurface for std::sync::Arc<T> {
    fn show(&self, kind: StatusKind, message: &str) {
        (**self).show(kind, message)
    }

    fn focus(&self) {
        (**self).focus()
    }
}
