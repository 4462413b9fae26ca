// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors from loading and checking vidscout config.

use std::path::PathBuf;

/// Why a config layer could not be read, or the merged config was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A config file exists but could not be read
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// A credential variable was set but could not be read
	#[error("Environment error: {0}")]
	Env(String),

	/// `field` is the dotted TOML key, e.g. `search.max_results`
	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },

	#[error("Could not determine home directory")]
	HomeDirNotFound,
}

impl ConfigError {
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}
