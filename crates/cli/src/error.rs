// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors reported by the command-line driver.

use table_booking::FieldRejection;
use table_booking_domain::DomainError;
use thiserror::Error;

/// Failures surfaced to the person running the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--timezone` value is not a known IANA zone.
    #[error("Unknown time zone '{0}'")]
    InvalidTimezone(String),

    /// A value could not be turned into a domain type.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The form refused to submit.
    #[error("Reservation not submitted. {0}")]
    Rejected(FieldRejection),

    /// The reservation could not be written as JSON.
    #[error("Failed to encode reservation: {0}")]
    Encode(#[from] serde_json::Error),
}
