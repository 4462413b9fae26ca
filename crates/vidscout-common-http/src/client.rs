// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Client builder preloaded with the vidscout User-Agent.
///
/// ```ignore
/// let client = vidscout_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Build a client with the given per-request timeout.
pub fn new_client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	builder().timeout(timeout).build()
}

/// `vidscout/{version} ({os}-{arch})`, e.g. `vidscout/0.1.0 (linux-x86_64)`.
pub fn user_agent() -> String {
	format!(
		"vidscout/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_product_version_and_platform() {
		let ua = user_agent();
		assert!(ua.starts_with("vidscout/"));
		assert!(ua.contains(env!("CARGO_PKG_VERSION")));
		assert!(ua.ends_with(')'));
		assert!(ua.contains(std::env::consts::OS));
	}

	#[test]
	fn client_with_timeout_builds() {
		assert!(new_client_with_timeout(Duration::from_secs(5)).is_ok());
	}
}
