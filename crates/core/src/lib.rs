// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod event;
mod field;
mod form;
mod host;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use event::FormEvent;
pub use field::{FieldState, Validator};
pub use form::BookingForm;
pub use host::BookingHost;
pub use state::{FieldRejection, FormField, FormPhase, SubmitOutcome};
