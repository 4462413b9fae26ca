// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use vidscout_common_config::SecretString;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub youtube: Option<YouTubeLayer>,
	#[serde(default)]
	pub search: Option<SearchLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
	#[serde(default)]
	pub retry: Option<RetryLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YouTubeLayer {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchLayer {
	#[serde(default)]
	pub max_results: Option<u32>,
	#[serde(default)]
	pub sort_order: Option<String>,
	#[serde(default)]
	pub preserve_search_order: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetryLayer {
	#[serde(default)]
	pub max_attempts: Option<u32>,
	#[serde(default)]
	pub base_delay_ms: Option<u64>,
	#[serde(default)]
	pub max_delay_ms: Option<u64>,
	#[serde(default)]
	pub backoff_factor: Option<f64>,
	#[serde(default)]
	pub jitter: Option<bool>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.youtube, other.youtube, YouTubeLayer::merge);
		merge_option(&mut self.search, other.search, SearchLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
		merge_option(&mut self.retry, other.retry, RetryLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

/// Overwrite each field of `$target` that is set in `$source`.
macro_rules! take_set_fields {
	($target:expr, $source:expr, [$($field:ident),+ $(,)?]) => {
		$(
			if $source.$field.is_some() {
				$target.$field = $source.$field;
			}
		)+
	};
}

impl YouTubeLayer {
	fn merge(&mut self, other: YouTubeLayer) {
		take_set_fields!(self, other, [api_key, base_url, timeout_secs]);
	}
}

impl SearchLayer {
	fn merge(&mut self, other: SearchLayer) {
		take_set_fields!(self, other, [max_results, sort_order, preserve_search_order]);
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		take_set_fields!(self, other, [level, format]);
	}
}

impl RetryLayer {
	fn merge(&mut self, other: RetryLayer) {
		take_set_fields!(
			self,
			other,
			[max_attempts, base_delay_ms, max_delay_ms, backoff_factor, jitter]
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn parse(toml_str: &str) -> ConfigLayer {
		toml::from_str(toml_str).unwrap()
	}

	#[test]
	fn test_parses_all_sections() {
		let layer = parse(
			r#"
			[youtube]
			api_key = "AIza-test"
			base_url = "http://localhost:8080/youtube/v3"
			timeout_secs = 5

			[search]
			max_results = 25
			sort_order = "date"
			preserve_search_order = false

			[logging]
			level = "debug"
			format = "json"

			[retry]
			max_attempts = 1
			"#,
		);

		let youtube = layer.youtube.unwrap();
		assert_eq!(youtube.api_key.unwrap().expose(), "AIza-test");
		assert_eq!(youtube.timeout_secs, Some(5));
		let search = layer.search.unwrap();
		assert_eq!(search.max_results, Some(25));
		assert_eq!(search.sort_order.as_deref(), Some("date"));
		assert_eq!(search.preserve_search_order, Some(false));
		assert_eq!(layer.logging.unwrap().format.as_deref(), Some("json"));
		assert_eq!(layer.retry.unwrap().max_attempts, Some(1));
	}

	#[test]
	fn test_debug_hides_api_key() {
		let layer = parse("[youtube]\napi_key = \"AIza-very-secret\"\n");
		let debug = format!("{layer:?}");
		assert!(!debug.contains("AIza-very-secret"));
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = parse("[search]\nmax_results = 20\nsort_order = \"rating\"\n");
		base.merge(parse("[search]\nsort_order = \"date\"\n"));

		let search = base.search.unwrap();
		assert_eq!(search.max_results, Some(20));
		assert_eq!(search.sort_order.as_deref(), Some("date"));
	}

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ConfigLayer::default();
		base.merge(parse("[logging]\nlevel = \"warn\"\n"));
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("warn"));
		assert!(base.youtube.is_none());
	}

	proptest! {
		#[test]
		fn later_layer_wins_when_set(a in 1u32..=50, b in proptest::option::of(1u32..=50)) {
			let mut merged = ConfigLayer {
				search: Some(SearchLayer { max_results: Some(a), ..Default::default() }),
				..Default::default()
			};
			merged.merge(ConfigLayer {
				search: Some(SearchLayer { max_results: b, ..Default::default() }),
				..Default::default()
			});

			let got = merged.search.and_then(|s| s.max_results);
			prop_assert_eq!(got, Some(b.unwrap_or(a)));
		}
	}
}
