// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Written to ~/.config/vidscout/config.toml when no user config exists.
///
/// Every setting is commented out so the built-in defaults stay in charge
/// until the user opts in.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# vidscout configuration
# Location: ~/.config/vidscout/config.toml
#
# Precedence (lowest to highest): built-in defaults, /etc/vidscout/config.toml,
# this file, --config <file>, VIDSCOUT_* environment variables, command line flags.
#

[youtube]
# YouTube Data API v3 key. Prefer VIDSCOUT_YOUTUBE_API_KEY or YOUTUBE_API_KEY
# (or their _FILE variants) over storing it here.
# api_key = "AIza..."

# base_url = "https://www.googleapis.com/youtube/v3"

# Per-request timeout (in seconds)
# timeout_secs = 10

[search]
# Number of videos per search, 1 to 50
# max_results = 11

# relevance, date or rating
# sort_order = "relevance"

# Keep results in the order the search returned them
# preserve_search_order = true

[logging]
# Log level: error, warn, info, debug, trace (RUST_LOG overrides)
# level = "warn"

# Log format: pretty, json, compact
# format = "pretty"

[retry]
# Total attempts per request; 1 disables retrying
# max_attempts = 3
# base_delay_ms = 200
# max_delay_ms = 5000
# backoff_factor = 2.0
# jitter = true
"#;

/// Create the config directory and a commented default config file if none
/// exists.
///
/// Returns `true` if a new config file was created.
pub fn ensure_default_config(config_file_path: &Path) -> Result<bool, ConfigError> {
	if config_file_path.exists() {
		debug!(path = %config_file_path.display(), "config file already exists");
		return Ok(false);
	}

	if let Some(parent) = config_file_path.parent() {
		if !parent.exists() {
			debug!(path = %parent.display(), "creating config directory");
			fs::create_dir_all(parent)?;
		}
	}

	info!(path = %config_file_path.display(), "creating default config file");
	fs::write(config_file_path, DEFAULT_CONFIG_TEMPLATE)?;

	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::ConfigLayer;
	use tempfile::tempdir;

	#[test]
	fn test_default_config_template_is_valid_toml() {
		let layer: ConfigLayer = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
		// Sections are present but every key is commented out.
		assert!(layer.youtube.unwrap().api_key.is_none());
		assert!(layer.search.unwrap().max_results.is_none());
	}

	#[test]
	fn test_ensure_default_config_creates_file_and_parents() {
		let dir = tempdir().unwrap();
		let config_path = dir.path().join("nested/vidscout/config.toml");

		let created = ensure_default_config(&config_path).unwrap();
		assert!(created);

		let contents = fs::read_to_string(&config_path).unwrap();
		assert!(contents.contains("[youtube]"));
		assert!(contents.contains("YOUTUBE_API_KEY"));
	}

	#[test]
	fn test_ensure_default_config_does_not_overwrite() {
		let dir = tempdir().unwrap();
		let config_path = dir.path().join("config.toml");

		fs::write(&config_path, "# existing config\n").unwrap();

		let created = ensure_default_config(&config_path).unwrap();
		assert!(!created);
		assert_eq!(
			fs::read_to_string(&config_path).unwrap(),
			"# existing config\n"
		);
	}
}
