// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compact count formatting (`950`, `1.5K`, `12K`, `3.4M`, `1B`).

const SCALES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Longest digit text kept before the suffix when a decimal is shown.
const MAX_DIGITS: usize = 3;

/// Abbreviate `n` with a K/M/B suffix.
///
/// Below 1,000 the exact value is returned. Otherwise `n` is divided by the
/// largest threshold it reaches and rounded to one decimal; a trailing `.0`
/// is dropped, and if the digits still exceed three characters the value is
/// rounded to a whole number instead (`12.3K` becomes `12K`).
///
/// The quotient is an `f64` and rounding looks at its exact binary value, so
/// `1.15` (stored just below) gives `1.1` while `2.75` (exact) gives `2.8`.
pub fn format_compact_number(n: u64) -> String {
	let Some(&(threshold, suffix)) = SCALES.iter().find(|(threshold, _)| n >= *threshold) else {
		return n.to_string();
	};

	let value = n as f64 / threshold as f64;

	let tenths = round_half_up_exact(value, 10);
	let mut digits = if tenths % 10 == 0 {
		(tenths / 10).to_string()
	} else {
		format!("{}.{}", tenths / 10, tenths % 10)
	};

	if digits.len() > MAX_DIGITS {
		digits = round_half_up_exact(value, 1).to_string();
	}

	digits + suffix
}

/// `value * scale` rounded to the nearest integer, ties upward, computed on
/// the exact binary value of `value`. `value` must be finite, at least 1.0
/// and below 2^64.
fn round_half_up_exact(value: f64, scale: u128) -> u128 {
	let bits = value.to_bits();
	let exponent = ((bits >> 52) & 0x7ff) as i32;
	let mantissa = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
	let shift = exponent - 1075;

	// value == mantissa * 2^shift
	if shift >= 0 {
		return (mantissa << shift) * scale;
	}

	let numerator = mantissa * scale;
	let Some(denominator) = 1u128.checked_shl(shift.unsigned_abs()) else {
		return 0;
	};
	let (quotient, remainder) = (numerator / denominator, numerator % denominator);
	if remainder * 2 >= denominator {
		quotient + 1
	} else {
		quotient
	}
}
