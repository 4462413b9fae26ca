// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace};
use vidscout_common_config::load_first_secret_env;

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Environment variables holding the YouTube API key, in lookup order.
/// Each also accepts a `_FILE` variant.
pub const API_KEY_ENV_VARS: &[&str] = &["VIDSCOUT_YOUTUBE_API_KEY", "YOUTUBE_API_KEY"];

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	/// A file named with `--config`
	ExplicitFile = 40,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied when the runtime config is built.
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
}

impl FileSource {
	/// System config: /etc/vidscout/config.toml
	pub fn system(paths: &PathsConfig) -> Self {
		Self {
			path: paths.system_config_file.clone(),
			precedence: Precedence::SystemFile,
			name: "system-config",
		}
	}

	/// User config: ~/.config/vidscout/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// The API key comes from [`API_KEY_ENV_VARS`]; everything else from
/// `VIDSCOUT_*` variables.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = layer_from_vars(std::env::vars());

		let api_key =
			load_first_secret_env(API_KEY_ENV_VARS).map_err(|e| ConfigError::Env(e.to_string()))?;
		if let Some(secret) = api_key.filter(|s| !s.is_blank()) {
			trace!("loaded YouTube API key from environment");
			layer
				.youtube
				.get_or_insert_with(YouTubeLayer::default)
				.api_key = Some(secret);
		}

		Ok(layer)
	}
}

/// Build a layer from the non-secret `VIDSCOUT_*` variables in `vars`.
///
/// Blank values are ignored, as are numbers that do not parse.
pub fn layer_from_vars<I>(vars: I) -> ConfigLayer
where
	I: IntoIterator<Item = (String, String)>,
{
	let mut layer = ConfigLayer::default();

	for (key, value) in vars {
		if !key.starts_with("VIDSCOUT_") {
			continue;
		}

		let value = value.trim().to_string();
		if value.is_empty() {
			continue;
		}

		trace!(key = %key, "processing env var");

		match key.as_str() {
			"VIDSCOUT_YOUTUBE_BASE_URL" => {
				layer
					.youtube
					.get_or_insert_with(YouTubeLayer::default)
					.base_url = Some(value);
			}
			"VIDSCOUT_YOUTUBE_TIMEOUT_SECS" => {
				if let Ok(v) = value.parse() {
					layer
						.youtube
						.get_or_insert_with(YouTubeLayer::default)
						.timeout_secs = Some(v);
				}
			}

			"VIDSCOUT_MAX_RESULTS" => {
				if let Ok(v) = value.parse() {
					layer
						.search
						.get_or_insert_with(SearchLayer::default)
						.max_results = Some(v);
				}
			}
			"VIDSCOUT_SORT_ORDER" => {
				layer
					.search
					.get_or_insert_with(SearchLayer::default)
					.sort_order = Some(value);
			}

			"VIDSCOUT_LOG_LEVEL" => {
				layer
					.logging
					.get_or_insert_with(LoggingLayer::default)
					.level = Some(value);
			}
			"VIDSCOUT_LOG_FORMAT" => {
				layer
					.logging
					.get_or_insert_with(LoggingLayer::default)
					.format = Some(value);
			}

			"VIDSCOUT_RETRY_MAX_ATTEMPTS" => {
				if let Ok(v) = value.parse() {
					layer
						.retry
						.get_or_insert_with(RetryLayer::default)
						.max_attempts = Some(v);
				}
			}

			_ => {
				// Unknown VIDSCOUT_ variable (including the API key), ignore
			}
		}
	}

	layer
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub max_results: Option<u32>,
	pub sort_order: Option<String>,
	pub base_url: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	/// Extra TOML file layered above the user config
	pub config_file: Option<PathBuf>,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(max_results) = self.overrides.max_results {
			layer
				.search
				.get_or_insert_with(SearchLayer::default)
				.max_results = Some(max_results);
		}

		if let Some(ref order) = self.overrides.sort_order {
			layer
				.search
				.get_or_insert_with(SearchLayer::default)
				.sort_order = Some(order.clone());
		}

		if let Some(ref base_url) = self.overrides.base_url {
			layer
				.youtube
				.get_or_insert_with(YouTubeLayer::default)
				.base_url = Some(base_url.clone());
		}

		if let Some(ref level) = self.overrides.log_level {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.level = Some(level.clone());
		}

		if let Some(ref format) = self.overrides.log_format {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.format = Some(format.clone());
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Cli > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::ExplicitFile);
		assert!(Precedence::ExplicitFile > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.youtube.is_none());
		assert!(layer.search.is_none());
	}

	#[test]
	fn test_file_source_missing_file_returns_empty() {
		let source = FileSource::custom(
			PathBuf::from("/nonexistent/vidscout.toml"),
			Precedence::UserFile,
			"test",
		);
		let layer = source.load().unwrap();
		assert!(layer.search.is_none());
	}

	#[test]
	fn test_file_source_reports_parse_errors_with_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[search\nmax_results = ").unwrap();

		let source = FileSource::custom(file.path().to_path_buf(), Precedence::UserFile, "test");
		match source.load() {
			Err(ConfigError::TomlParse { path, .. }) => assert_eq!(path, file.path()),
			other => panic!("expected parse error, got {other:?}"),
		}
	}

	#[test]
	fn test_env_vars_map_to_sections() {
		let layer = layer_from_vars(vars(&[
			("VIDSCOUT_MAX_RESULTS", "20"),
			("VIDSCOUT_SORT_ORDER", "date"),
			("VIDSCOUT_LOG_LEVEL", "debug"),
			("VIDSCOUT_LOG_FORMAT", "json"),
			("VIDSCOUT_YOUTUBE_BASE_URL", "http://localhost:9000/youtube/v3"),
			("VIDSCOUT_RETRY_MAX_ATTEMPTS", "1"),
			("PATH", "/usr/bin"),
		]));

		let search = layer.search.unwrap();
		assert_eq!(search.max_results, Some(20));
		assert_eq!(search.sort_order.as_deref(), Some("date"));
		let logging = layer.logging.unwrap();
		assert_eq!(logging.level.as_deref(), Some("debug"));
		assert_eq!(logging.format.as_deref(), Some("json"));
		assert_eq!(
			layer.youtube.unwrap().base_url.as_deref(),
			Some("http://localhost:9000/youtube/v3")
		);
		assert_eq!(layer.retry.unwrap().max_attempts, Some(1));
	}

	#[test]
	fn test_env_ignores_blank_and_unparseable_values() {
		let layer = layer_from_vars(vars(&[
			("VIDSCOUT_MAX_RESULTS", "lots"),
			("VIDSCOUT_SORT_ORDER", "   "),
		]));
		assert!(layer.search.is_none());
	}

	#[test]
	fn test_cli_overrides_populate_layer() {
		let source = CliSource::new(CliOverrides {
			max_results: Some(5),
			sort_order: Some("rating".to_string()),
			log_level: Some("trace".to_string()),
			..Default::default()
		});
		let layer = source.load().unwrap();

		let search = layer.search.unwrap();
		assert_eq!(search.max_results, Some(5));
		assert_eq!(search.sort_order.as_deref(), Some("rating"));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("trace"));
		assert!(layer.youtube.is_none());
	}
}
