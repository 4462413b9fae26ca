// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Relative date formatting ("3 days ago", "in 2 hours").

use chrono::{DateTime, Utc};
use thiserror::Error;

const MILLIS_IN_SECOND: f64 = 1_000.0;
const MILLIS_IN_MINUTE: f64 = 60_000.0;
const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1_440.0;
/// A month is counted as 30 days.
const MINUTES_IN_MONTH: f64 = 43_200.0;
/// A year is counted as 365 days.
const MINUTES_IN_YEAR: f64 = 525_600.0;

#[derive(Debug, Error)]
pub enum FormatError {
	#[error("invalid timestamp '{input}': {source}")]
	InvalidTimestamp {
		input: String,
		#[source]
		source: chrono::ParseError,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
	Second,
	Minute,
	Hour,
	Day,
	Month,
	Year,
}

impl Unit {
	fn name(self) -> &'static str {
		match self {
			Unit::Second => "second",
			Unit::Minute => "minute",
			Unit::Hour => "hour",
			Unit::Day => "day",
			Unit::Month => "month",
			Unit::Year => "year",
		}
	}
}

/// Format an RFC 3339 timestamp relative to the current instant.
pub fn format_relative_date(timestamp: &str) -> Result<String, FormatError> {
	let then = DateTime::parse_from_rfc3339(timestamp.trim())
		.map_err(|source| FormatError::InvalidTimestamp {
			input: timestamp.to_string(),
			source,
		})?
		.with_timezone(&Utc);

	Ok(format_relative_date_from(then, Utc::now()))
}

/// Format `then` relative to `now` in the single largest fitting unit.
///
/// Under a minute counts seconds, under an hour minutes, under a day hours,
/// under 30 days days, under 365 days months, otherwise years. Counts are
/// rounded half-up, so 90 seconds reads "2 minutes". A month count that
/// rounds to 12 is reported as "1 year".
pub fn format_relative_date_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let future = then > now;
	let millis = (now - then).num_milliseconds().unsigned_abs() as f64;
	let minutes = millis / MILLIS_IN_MINUTE;

	let (count, unit) = if minutes < 1.0 {
		(round_half_up(millis / MILLIS_IN_SECOND), Unit::Second)
	} else if minutes < MINUTES_IN_HOUR {
		(round_half_up(minutes), Unit::Minute)
	} else if minutes < MINUTES_IN_DAY {
		(round_half_up(minutes / MINUTES_IN_HOUR), Unit::Hour)
	} else if minutes < MINUTES_IN_MONTH {
		(round_half_up(minutes / MINUTES_IN_DAY), Unit::Day)
	} else if minutes < MINUTES_IN_YEAR {
		match round_half_up(minutes / MINUTES_IN_MONTH) {
			12 => (1, Unit::Year),
			months => (months, Unit::Month),
		}
	} else {
		(round_half_up(minutes / MINUTES_IN_YEAR), Unit::Year)
	};

	let plural = if count == 1 { "" } else { "s" };
	let distance = format!("{count} {}{plural}", unit.name());

	if future {
		format!("in {distance}")
	} else {
		format!("{distance} ago")
	}
}

fn round_half_up(value: f64) -> u64 {
	(value + 0.5).floor() as u64
}
