// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vidscout_common_config::SecretString;
use vidscout_youtube::{RetryConfig, SortOrder, DEFAULT_BASE_URL, DEFAULT_MAX_RESULTS};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The final, validated configuration for vidscout.
#[derive(Debug, Clone)]
pub struct VidscoutConfig {
	pub youtube: YouTubeConfig,
	pub search: SearchConfig,
	pub logging: LoggingConfig,
	pub retry: RetryConfig,
	pub paths: PathsConfig,
}

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
	/// Absent until a file, `VIDSCOUT_YOUTUBE_API_KEY` or `YOUTUBE_API_KEY`
	/// provides one.
	pub api_key: Option<SecretString>,
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for YouTubeConfig {
	fn default() -> Self {
		Self {
			api_key: None,
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
	pub max_results: u32,
	pub sort_order: SortOrder,
	pub preserve_search_order: bool,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			max_results: DEFAULT_MAX_RESULTS,
			sort_order: SortOrder::Relevance,
			preserve_search_order: true,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	#[default]
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl VidscoutConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			youtube: build_youtube_config(layer.youtube),
			search: build_search_config(layer.search)?,
			logging: build_logging_config(layer.logging)?,
			retry: build_retry_config(layer.retry),
			paths,
		})
	}

	/// The API key, if one was configured and is not blank.
	pub fn api_key(&self) -> Option<&SecretString> {
		self.youtube.api_key.as_ref().filter(|key| !key.is_blank())
	}
}

fn build_youtube_config(layer: Option<YouTubeLayer>) -> YouTubeConfig {
	let layer = layer.unwrap_or_default();
	YouTubeConfig {
		api_key: layer.api_key,
		base_url: layer
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
		timeout: Duration::from_secs(layer.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
	}
}

fn build_search_config(layer: Option<SearchLayer>) -> Result<SearchConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	let sort_order = match layer.sort_order.as_deref() {
		Some(s) => SortOrder::from_str(s)
			.map_err(|e| ConfigError::invalid_value("search.sort_order", e.to_string()))?,
		None => SortOrder::default(),
	};

	Ok(SearchConfig {
		max_results: layer.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
		sort_order,
		preserve_search_order: layer.preserve_search_order.unwrap_or(true),
	})
}

fn build_logging_config(layer: Option<LoggingLayer>) -> Result<LoggingConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(LoggingConfig {
		level: parse_log_level(layer.level.as_deref())?,
		format: parse_log_format(layer.format.as_deref())?,
	})
}

fn parse_log_level(s: Option<&str>) -> Result<LogLevel, ConfigError> {
	match s.map(str::to_ascii_lowercase).as_deref() {
		None => Ok(LogLevel::default()),
		Some("error") => Ok(LogLevel::Error),
		Some("warn") => Ok(LogLevel::Warn),
		Some("info") => Ok(LogLevel::Info),
		Some("debug") => Ok(LogLevel::Debug),
		Some("trace") => Ok(LogLevel::Trace),
		Some(other) => Err(ConfigError::invalid_value(
			"logging.level",
			format!("unknown level '{other}' (expected error, warn, info, debug or trace)"),
		)),
	}
}

fn parse_log_format(s: Option<&str>) -> Result<LogFormat, ConfigError> {
	match s.map(str::to_ascii_lowercase).as_deref() {
		None => Ok(LogFormat::default()),
		Some("pretty") => Ok(LogFormat::Pretty),
		Some("json") => Ok(LogFormat::Json),
		Some("compact") => Ok(LogFormat::Compact),
		Some(other) => Err(ConfigError::invalid_value(
			"logging.format",
			format!("unknown format '{other}' (expected pretty, json or compact)"),
		)),
	}
}

fn build_retry_config(layer: Option<RetryLayer>) -> RetryConfig {
	let layer = layer.unwrap_or_default();
	let defaults = RetryConfig::default();
	RetryConfig {
		max_attempts: layer.max_attempts.unwrap_or(defaults.max_attempts),
		base_delay: layer
			.base_delay_ms
			.map(Duration::from_millis)
			.unwrap_or(defaults.base_delay),
		max_delay: layer
			.max_delay_ms
			.map(Duration::from_millis)
			.unwrap_or(defaults.max_delay),
		backoff_factor: layer.backoff_factor.unwrap_or(defaults.backoff_factor),
		jitter: layer.jitter.unwrap_or(defaults.jitter),
	}
}
