// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised by the search pipeline.

use std::fmt;

use thiserror::Error;
use vidscout_youtube::YouTubeError;

/// Which upstream call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Search,
	Metadata,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Stage::Search => f.write_str("search"),
			Stage::Metadata => f.write_str("metadata"),
		}
	}
}

#[derive(Debug, Error)]
pub enum ResolveError {
	/// Either upstream call failed; the pipeline stops and returns nothing.
	#[error("upstream {stage} request failed: {source}")]
	Upstream {
		stage: Stage,
		#[source]
		source: YouTubeError,
	},

	/// The caller cancelled the search before it finished.
	#[error("search cancelled")]
	Cancelled,
}

impl ResolveError {
	pub fn stage(&self) -> Option<Stage> {
		match self {
			ResolveError::Upstream { stage, .. } => Some(*stage),
			ResolveError::Cancelled => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	#[error("search keyword must not be empty")]
	EmptyKeyword,
}
