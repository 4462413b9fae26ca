// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use tracing::warn;
use vidscout_youtube::MAX_RESULTS_LIMIT;

use crate::runtime::VidscoutConfig;
use crate::ConfigError;

/// Validate the configuration.
///
/// A missing API key is not an error here; the command that needs it
/// reports that.
pub fn validate_config(config: &VidscoutConfig) -> Result<(), ConfigError> {
	validate_youtube(config)?;
	validate_search(config)?;
	validate_retry(config)?;

	Ok(())
}

fn validate_youtube(config: &VidscoutConfig) -> Result<(), ConfigError> {
	let youtube = &config.youtube;

	if config.api_key().is_none() {
		warn!("no YouTube API key configured");
	}

	let base_url = youtube.base_url.trim();
	if base_url.is_empty() {
		return Err(ConfigError::invalid_value(
			"youtube.base_url",
			"base_url cannot be empty",
		));
	}
	if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
		return Err(ConfigError::invalid_value(
			"youtube.base_url",
			"must start with http:// or https://",
		));
	}

	if youtube.timeout.is_zero() {
		return Err(ConfigError::invalid_value(
			"youtube.timeout_secs",
			"must be greater than 0",
		));
	}

	Ok(())
}

fn validate_search(config: &VidscoutConfig) -> Result<(), ConfigError> {
	let max_results = config.search.max_results;
	if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
		return Err(ConfigError::invalid_value(
			"search.max_results",
			format!("must be between 1 and {MAX_RESULTS_LIMIT}"),
		));
	}

	Ok(())
}

fn validate_retry(config: &VidscoutConfig) -> Result<(), ConfigError> {
	let retry = &config.retry;

	if retry.max_attempts == 0 {
		return Err(ConfigError::invalid_value(
			"retry.max_attempts",
			"must be at least 1",
		));
	}

	if retry.max_attempts > 20 {
		return Err(ConfigError::invalid_value(
			"retry.max_attempts",
			"must be at most 20 (unreasonably high)",
		));
	}

	if retry.backoff_factor < 1.0 {
		return Err(ConfigError::invalid_value(
			"retry.backoff_factor",
			"must be at least 1.0",
		));
	}

	if retry.backoff_factor > 10.0 {
		return Err(ConfigError::invalid_value(
			"retry.backoff_factor",
			"must be at most 10.0",
		));
	}

	if retry.base_delay > retry.max_delay {
		return Err(ConfigError::invalid_value(
			"retry.base_delay",
			"cannot be greater than max_delay",
		));
	}

	Ok(())
}
