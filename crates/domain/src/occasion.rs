// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::OccasionValue;
use serde::{Deserialize, Serialize};

/// One entry of the occasion picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccasionOption {
    /// The value submitted with the reservation.
    pub value: OccasionValue,
    /// The label shown to the guest.
    pub label: String,
}

impl OccasionOption {
    /// Creates a new `OccasionOption`.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: OccasionValue::new(value),
            label: label.to_string(),
        }
    }
}

/// The fixed list of occasions a form offers.
///
/// Built once and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccasionOptions {
    options: Vec<OccasionOption>,
}

impl OccasionOptions {
    /// Creates an option list from explicit entries.
    #[must_use]
    pub const fn new(options: Vec<OccasionOption>) -> Self {
        Self { options }
    }

    /// Returns the options in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[OccasionOption] {
        &self.options
    }

    /// Looks up the option carrying `value`.
    #[must_use]
    pub fn find(&self, value: &OccasionValue) -> Option<&OccasionOption> {
        self.options.iter().find(|option| &option.value == value)
    }

    /// Returns `true` if `value` is one of the offered occasions.
    #[must_use]
    pub fn contains(&self, value: &OccasionValue) -> bool {
        self.find(value).is_some()
    }
}

impl Default for OccasionOptions {
    fn default() -> Self {
        Self::new(vec![
            OccasionOption::new("birthday", "Birthday"),
            OccasionOption::new("anniversary", "Anniversary"),
        ])
    }
}
