// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the YouTube Data API client.

use thiserror::Error;
use vidscout_common_http::RetryableError;

#[derive(Debug, Error)]
pub enum YouTubeError {
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	/// Short-term throttling (HTTP 429 or `rateLimitExceeded`).
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Daily quota for the API key is used up.
	#[error("API quota exceeded")]
	QuotaExceeded,

	#[error("Invalid or unauthorized API key")]
	Unauthorized,

	#[error("Invalid base URL: {0}")]
	InvalidBaseUrl(String),

	#[error("Invalid response from YouTube: {0}")]
	InvalidResponse(String),

	#[error("YouTube API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl RetryableError for YouTubeError {
	fn is_retryable(&self) -> bool {
		match self {
			YouTubeError::Network(e) => e.is_retryable(),
			YouTubeError::Timeout => true,
			YouTubeError::RateLimited => true,
			YouTubeError::QuotaExceeded => false,
			YouTubeError::Unauthorized => false,
			YouTubeError::InvalidBaseUrl(_) => false,
			YouTubeError::InvalidResponse(_) => false,
			YouTubeError::ApiError { status, .. } => *status >= 500,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transient_errors_are_retryable() {
		assert!(YouTubeError::Timeout.is_retryable());
		assert!(YouTubeError::RateLimited.is_retryable());
		assert!(YouTubeError::ApiError {
			status: 503,
			message: "backend".into()
		}
		.is_retryable());
	}

	#[test]
	fn permanent_errors_are_not_retryable() {
		assert!(!YouTubeError::QuotaExceeded.is_retryable());
		assert!(!YouTubeError::Unauthorized.is_retryable());
		assert!(!YouTubeError::InvalidResponse("bad json".into()).is_retryable());
		assert!(!YouTubeError::ApiError {
			status: 400,
			message: "invalid order".into()
		}
		.is_retryable());
	}
}
