// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where vidscout looks for its config files.

use std::path::{Path, PathBuf};

use crate::ConfigError;

pub const SYSTEM_CONFIG_FILE: &str = "/etc/vidscout/config.toml";

/// Config file path relative to the XDG config home.
const USER_CONFIG_FILE: &str = "vidscout/config.toml";

/// The two on-disk config locations, lowest precedence first.
#[derive(Debug, Clone)]
pub struct PathsConfig {
	/// `$XDG_CONFIG_HOME/vidscout/config.toml`, or under `~/.config`
	pub user_config_file: PathBuf,
	pub system_config_file: PathBuf,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config").join(USER_CONFIG_FILE),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
		}
	}
}

/// Resolve config paths from `XDG_CONFIG_HOME` and the home directory.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
	let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
	Ok(paths_for(&home, xdg_config_home))
}

fn paths_for(home: &Path, xdg_config_home: Option<PathBuf>) -> PathsConfig {
	// An empty XDG_CONFIG_HOME counts as unset.
	let config_home = xdg_config_home
		.filter(|dir| !dir.as_os_str().is_empty())
		.unwrap_or_else(|| home.join(".config"));

	tracing::debug!(config_home = %config_home.display(), "resolved config home");

	PathsConfig {
		user_config_file: config_home.join(USER_CONFIG_FILE),
		system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
	}
}
