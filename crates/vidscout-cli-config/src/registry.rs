// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::VidscoutConfig;
use crate::sources::ConfigSource;
use crate::validation::validate_config;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are merged lowest precedence first, so higher precedence
	/// sources override lower ones. A source that fails to load aborts
	/// loading; a file that does not exist is not a failure.
	pub fn load(&self, paths: PathsConfig) -> Result<VidscoutConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		debug!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load()?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = VidscoutConfig::from_layer(merged, paths)?;
		validate_config(&config)?;

		info!(
			sort_order = %config.search.sort_order,
			max_results = config.search.max_results,
			has_api_key = config.api_key().is_some(),
			"configuration loaded"
		);

		Ok(config)
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::SearchLayer;
	use crate::sources::{DefaultsSource, FileSource, Precedence};
	use std::io::Write;
	use vidscout_youtube::SortOrder;

	struct MockSource {
		name: &'static str,
		precedence: Precedence,
		max_results: u32,
	}

	impl ConfigSource for MockSource {
		fn name(&self) -> &'static str {
			self.name
		}
		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ConfigLayer, ConfigError> {
			Ok(ConfigLayer {
				search: Some(SearchLayer {
					max_results: Some(self.max_results),
					..Default::default()
				}),
				..Default::default()
			})
		}
	}

	#[test]
	fn test_registry_registers_sources() {
		let mut registry = ConfigRegistry::new();
		assert_eq!(registry.source_count(), 0);

		registry.register(Box::new(DefaultsSource));
		assert_eq!(registry.source_count(), 1);
	}

	#[test]
	fn test_registry_loads_with_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(PathsConfig::default()).unwrap();
		assert_eq!(config.search.max_results, 11);
		assert_eq!(config.search.sort_order, SortOrder::Relevance);
	}

	#[test]
	fn test_precedence_merge_order() {
		let mut registry = ConfigRegistry::new();

		// Registered out of order; the registry sorts.
		registry.register(Box::new(MockSource {
			name: "cli",
			precedence: Precedence::Cli,
			max_results: 7,
		}));
		registry.register(Box::new(MockSource {
			name: "user",
			precedence: Precedence::UserFile,
			max_results: 30,
		}));

		let config = registry.load(PathsConfig::default()).unwrap();
		assert_eq!(config.search.max_results, 7);
	}

	#[test]
	fn test_file_layers_merge_field_by_field() {
		let mut system = tempfile::NamedTempFile::new().unwrap();
		writeln!(system, "[search]\nmax_results = 40\nsort_order = \"rating\"").unwrap();
		let mut user = tempfile::NamedTempFile::new().unwrap();
		writeln!(user, "[search]\nsort_order = \"date\"").unwrap();

		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(FileSource::custom(
			user.path().to_path_buf(),
			Precedence::UserFile,
			"user",
		)));
		registry.register(Box::new(FileSource::custom(
			system.path().to_path_buf(),
			Precedence::SystemFile,
			"system",
		)));

		let config = registry.load(PathsConfig::default()).unwrap();
		assert_eq!(config.search.max_results, 40);
		assert_eq!(config.search.sort_order, SortOrder::Date);
	}

	#[test]
	fn test_broken_file_fails_loading() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "this is not toml").unwrap();

		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(FileSource::custom(
			file.path().to_path_buf(),
			Precedence::UserFile,
			"user",
		)));

		assert!(matches!(
			registry.load(PathsConfig::default()),
			Err(ConfigError::TomlParse { .. })
		));
	}

	#[test]
	fn test_invalid_merged_config_fails_validation() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(MockSource {
			name: "cli",
			precedence: Precedence::Cli,
			max_results: 500,
		}));

		assert!(matches!(
			registry.load(PathsConfig::default()),
			Err(ConfigError::InvalidValue { .. })
		));
	}
}
