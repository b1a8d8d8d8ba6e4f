// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Returns `true` if `input` represents a finite number.
///
/// Surrounding whitespace is ignored. Empty input, `NaN` and the
/// infinities are not numeric.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    parse_finite(input).is_some()
}

/// Parses `input` as a finite number, ignoring surrounding whitespace.
pub(crate) fn parse_finite(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value: &f64| value.is_finite())
}
