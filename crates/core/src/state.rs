// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use table_booking_domain::ValidationError;

/// Where the current draft is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormPhase {
    /// The user is still filling in the form.
    #[default]
    Editing,
    /// The draft was handed to the host. Any further edit starts a new draft.
    ///
    /// Reported only; submitting again is still allowed.
    Submitted,
}

impl FormPhase {
    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitted => "Submitted",
        }
    }
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fields of the booking form, in submit-check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// The reservation date.
    Date,
    /// The seating time.
    Time,
    /// The party size.
    Guests,
    /// The occasion.
    Occasion,
}

impl FormField {
    /// All fields in submit-check order.
    pub const ALL: [Self; 4] = [Self::Date, Self::Time, Self::Guests, Self::Occasion];

    /// Returns the form control name of this field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Date => "res-date",
            Self::Time => "res-time",
            Self::Guests => "guests",
            Self::Occasion => "occasion",
        }
    }

    /// Returns the label shown next to this field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Date => "Choose date",
            Self::Time => "Choose time",
            Self::Guests => "Number of guests",
            Self::Occasion => "Occasion",
        }
    }

    /// The error this field reports when it has no value at all.
    pub(crate) const fn missing_error(self) -> ValidationError {
        match self {
            Self::Date => ValidationError::MissingDate,
            Self::Time => ValidationError::MissingTime,
            Self::Guests => ValidationError::GuestsNotNumeric,
            Self::Occasion => ValidationError::MissingOccasion,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The first field that failed validation during a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRejection {
    /// The failing field.
    pub field: FormField,
    /// Why it failed.
    pub error: ValidationError,
}

impl std::fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.error)
    }
}

/// The result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the host received the reservation.
    Submitted,
    /// A field failed; the host was not called.
    ///
    /// No field is marked touched by a rejected submit, so an untouched
    /// field keeps showing no inline error.
    Rejected(FieldRejection),
}

impl SubmitOutcome {
    /// Returns `true` if the host received a reservation.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}
