// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types for the YouTube Data API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound the `search` endpoint accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u32 = 50;

pub const DEFAULT_MAX_RESULTS: u32 = 11;

/// Result ordering for the `search` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	#[default]
	Relevance,
	Date,
	Rating,
}

impl SortOrder {
	/// Value sent as the `order` query parameter.
	pub fn as_str(&self) -> &'static str {
		match self {
			SortOrder::Relevance => "relevance",
			SortOrder::Date => "date",
			SortOrder::Rating => "rating",
		}
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected relevance, date or rating)")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
	type Err = ParseSortOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"relevance" => Ok(SortOrder::Relevance),
			"date" => Ok(SortOrder::Date),
			"rating" => Ok(SortOrder::Rating),
			other => Err(ParseSortOrderError(other.to_string())),
		}
	}
}

/// Parameters for one `search` call. Results are always restricted to videos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub query: String,
	pub order: SortOrder,
	pub max_results: u32,
}

impl SearchRequest {
	/// `max_results` is clamped to `1..=MAX_RESULTS_LIMIT`.
	pub fn new(query: impl Into<String>, order: SortOrder, max_results: u32) -> Self {
		Self {
			query: query.into(),
			order,
			max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
		}
	}
}

/// Body of `GET /search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
	#[serde(default)]
	pub items: Vec<SearchResult>,
}

impl SearchListResponse {
	/// Video ids in response order. Items without a `videoId` (channels,
	/// playlists) are skipped.
	pub fn video_ids(&self) -> Vec<String> {
		self
			.items
			.iter()
			.filter_map(|item| item.id.video_id.clone())
			.collect()
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
	pub id: ResourceId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
	#[serde(default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub video_id: Option<String>,
}

/// Body of `GET /videos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
	#[serde(default)]
	pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
	pub id: String,
	pub snippet: VideoSnippet,
	#[serde(default)]
	pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
	pub published_at: DateTime<Utc>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub channel_title: String,
	#[serde(default)]
	pub thumbnails: Thumbnails,
}

/// Thumbnail variants keyed by the API's size names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
	#[serde(default)]
	pub default: Option<Thumbnail>,
	#[serde(default)]
	pub medium: Option<Thumbnail>,
	#[serde(default)]
	pub high: Option<Thumbnail>,
	#[serde(default)]
	pub standard: Option<Thumbnail>,
	#[serde(default)]
	pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
	/// The `medium` variant, falling back to `high` then `default`.
	pub fn medium_url(&self) -> Option<&str> {
		self
			.medium
			.as_ref()
			.or(self.high.as_ref())
			.or(self.default.as_ref())
			.map(|t| t.url.as_str())
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
	pub url: String,
	#[serde(default)]
	pub width: Option<u32>,
	#[serde(default)]
	pub height: Option<u32>,
}

/// Statistics block. The API sends counts as decimal strings; any field can
/// be missing when the owner hides it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
	#[serde(default)]
	pub view_count: Option<Count>,
	#[serde(default)]
	pub like_count: Option<Count>,
	#[serde(default)]
	pub comment_count: Option<Count>,
}

/// A count that arrives either as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Count {
	Number(u64),
	Text(String),
}

impl Count {
	/// Numeric value, or `None` when the text form does not parse.
	pub fn value(&self) -> Option<u64> {
		match self {
			Count::Number(n) => Some(*n),
			Count::Text(s) => s.trim().parse().ok(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
	pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
	#[serde(default)]
	pub code: u16,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
	#[serde(default)]
	pub reason: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// The API rejects maxResults outside 0..=50; we never send 0 either.
		#[test]
		fn max_results_is_clamped(n in 0u32..1000) {
			let request = SearchRequest::new("lofi", SortOrder::Relevance, n);
			prop_assert!((1..=MAX_RESULTS_LIMIT).contains(&request.max_results));
		}

		#[test]
		fn query_is_preserved(query in "\\PC*") {
			let request = SearchRequest::new(query.clone(), SortOrder::Date, 5);
			prop_assert_eq!(request.query, query);
		}
	}

	#[test]
	fn sort_order_parses_case_insensitively() {
		assert_eq!("Date".parse::<SortOrder>().unwrap(), SortOrder::Date);
		assert_eq!(" rating ".parse::<SortOrder>().unwrap(), SortOrder::Rating);
		assert!("viewCount".parse::<SortOrder>().is_err());
		assert_eq!(SortOrder::default().as_str(), "relevance");
	}

	#[test]
	fn video_ids_skip_non_video_items() {
		let body = r#"{
			"kind": "youtube#searchListResponse",
			"items": [
				{"id": {"kind": "youtube#video", "videoId": "a1"}},
				{"id": {"kind": "youtube#channel", "channelId": "UC1"}},
				{"id": {"kind": "youtube#video", "videoId": "b2"}}
			]
		}"#;
		let response: SearchListResponse = serde_json::from_str(body).unwrap();
		assert_eq!(response.video_ids(), vec!["a1", "b2"]);
	}

	#[test]
	fn missing_items_means_empty() {
		let response: SearchListResponse = serde_json::from_str("{}").unwrap();
		assert!(response.video_ids().is_empty());
	}

	#[test]
	fn counts_accept_strings_and_numbers() {
		let stats: VideoStatistics =
			serde_json::from_str(r#"{"viewCount": "1500", "commentCount": 12}"#).unwrap();
		assert_eq!(stats.view_count.and_then(|c| c.value()), Some(1500));
		assert_eq!(stats.comment_count.and_then(|c| c.value()), Some(12));
		assert!(stats.like_count.is_none());
		assert_eq!(Count::Text("n/a".into()).value(), None);
	}

	#[test]
	fn thumbnail_prefers_medium_then_high_then_default() {
		let thumb = |url: &str| {
			Some(Thumbnail {
				url: url.to_string(),
				width: None,
				height: None,
			})
		};

		let all = Thumbnails {
			default: thumb("d"),
			medium: thumb("m"),
			high: thumb("h"),
			..Default::default()
		};
		assert_eq!(all.medium_url(), Some("m"));

		let no_medium = Thumbnails {
			default: thumb("d"),
			high: thumb("h"),
			..Default::default()
		};
		assert_eq!(no_medium.medium_url(), Some("h"));

		assert_eq!(Thumbnails::default().medium_url(), None);
	}
}
