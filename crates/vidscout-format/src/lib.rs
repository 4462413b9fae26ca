// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display helpers for search results.
//!
//! - [`format_compact_number`]: `1500` to `"1.5K"`
//! - [`format_relative_date`]: an RFC 3339 timestamp to `"3 days ago"`

mod date;
mod number;

pub use date::{format_relative_date, format_relative_date_from, FormatError};
pub use number::format_compact_number;
