// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use table_booking_domain::{ValidationError, ValidationResult};

/// A validator bound to one field.
pub type Validator<T> = Box<dyn Fn(Option<&T>) -> ValidationResult + Send + Sync>;

/// Tracks the value of a single form field and whether the user has
/// touched it.
///
/// The error is never stored. It is derived from the current value on
/// every read, so it can never lag behind a value change.
pub struct FieldState<T> {
    value: Option<T>,
    touched: bool,
    validator: Validator<T>,
}

impl<T> FieldState<T> {
    /// Creates an untouched field.
    ///
    /// # Arguments
    ///
    /// * `initial` - The starting value
    /// * `validator` - The rule applied to the value
    pub fn new<V>(initial: Option<T>, validator: V) -> Self
    where
        V: Fn(Option<&T>) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            value: initial,
            touched: false,
            validator: Box::new(validator),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replaces the value and marks the field as touched.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
        self.touched = true;
    }

    /// Returns `true` once the value has been set at least once.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Runs the validator against the current value, touched or not.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if the current value is invalid.
    pub fn validate(&self) -> ValidationResult {
        (self.validator)(self.value.as_ref())
    }

    /// Returns the error to display, if any.
    ///
    /// An untouched field never displays an error.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        self.validate().err()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FieldState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldState")
            .field("value", &self.value)
            .field("touched", &self.touched)
            .finish_non_exhaustive()
    }
}
