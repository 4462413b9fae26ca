// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading credentials from the environment.
//!
//! A credential named `VAR` can be given directly (`VAR=...`) or as a path to
//! a file holding it (`VAR_FILE=/run/secrets/...`). The file form wins when
//! both are set, and one trailing newline is stripped from file contents.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;
use tracing::debug;
use vidscout_common_secret::SecretString;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Read `VAR_FILE` or `VAR`, returning `Ok(None)` when neither is set.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;
		debug!(var = %file_var, path = %path.display(), "loaded secret from file");

		let value = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(SecretString::new(value)));
	}

	Ok(env::var(var).ok().map(SecretString::new))
}

/// Try each variable name in turn and return the first one that is set.
///
/// Used for keys that have both a namespaced and a conventional name, e.g.
/// `VIDSCOUT_YOUTUBE_API_KEY` before `YOUTUBE_API_KEY`.
pub fn load_first_secret_env(vars: &[&str]) -> Result<Option<SecretString>, SecretEnvError> {
	for var in vars {
		if let Some(secret) = load_secret_env(var)? {
			return Ok(Some(secret));
		}
	}
	Ok(None)
}
