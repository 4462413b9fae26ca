// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Normalized search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use vidscout_youtube::{Count, Video};

const WATCH_URL_BASE: &str = "https://youtu.be";

/// One video with its metadata and statistics, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
	pub id: String,
	pub title: String,
	pub description: String,
	pub channel: String,
	pub thumbnail_url: String,
	pub published_at: DateTime<Utc>,
	pub view_count: u64,
	pub comment_count: u64,
}

impl ResultRecord {
	/// Short link to the video, e.g. `https://youtu.be/dQw4w9WgXcQ`.
	pub fn watch_url(&self) -> String {
		format!("{WATCH_URL_BASE}/{}", self.id)
	}
}

impl From<Video> for ResultRecord {
	/// Hidden or malformed statistics count as zero.
	fn from(video: Video) -> Self {
		let stats = video.statistics.unwrap_or_default();
		let view_count = count_or_zero(&video.id, "viewCount", stats.view_count.as_ref());
		let comment_count = count_or_zero(&video.id, "commentCount", stats.comment_count.as_ref());
		let snippet = video.snippet;

		Self {
			thumbnail_url: snippet.thumbnails.medium_url().unwrap_or_default().to_string(),
			id: video.id,
			title: snippet.title,
			description: snippet.description,
			channel: snippet.channel_title,
			published_at: snippet.published_at,
			view_count,
			comment_count,
		}
	}
}

fn count_or_zero(id: &str, field: &str, count: Option<&Count>) -> u64 {
	match count {
		None => 0,
		Some(count) => count.value().unwrap_or_else(|| {
			warn!(video_id = %id, field, raw = ?count, "unparseable statistic, using 0");
			0
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn video(json: &str) -> Video {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn maps_snippet_and_statistics() {
		let record = ResultRecord::from(video(
			r#"{
				"id": "abc123",
				"snippet": {
					"publishedAt": "2023-11-05T18:22:41Z",
					"title": "lofi hip hop radio",
					"description": "beats to relax to",
					"channelTitle": "Lofi Girl",
					"thumbnails": {
						"default": {"url": "https://i.ytimg.com/vi/abc123/default.jpg"},
						"medium": {"url": "https://i.ytimg.com/vi/abc123/mqdefault.jpg", "width": 320, "height": 180}
					}
				},
				"statistics": {"viewCount": "1234567", "likeCount": "10", "commentCount": "89"}
			}"#,
		));

		assert_eq!(record.id, "abc123");
		assert_eq!(record.channel, "Lofi Girl");
		assert_eq!(record.thumbnail_url, "https://i.ytimg.com/vi/abc123/mqdefault.jpg");
		assert_eq!(record.published_at.to_rfc3339(), "2023-11-05T18:22:41+00:00");
		assert_eq!(record.view_count, 1_234_567);
		assert_eq!(record.comment_count, 89);
		assert_eq!(record.watch_url(), "https://youtu.be/abc123");
	}

	#[test]
	fn missing_statistics_default_to_zero() {
		let record = ResultRecord::from(video(
			r#"{"id": "a", "snippet": {"publishedAt": "2024-01-01T00:00:00Z"}}"#,
		));
		assert_eq!(record.view_count, 0);
		assert_eq!(record.comment_count, 0);
		assert_eq!(record.thumbnail_url, "");
	}

	#[test]
	fn hidden_comment_count_defaults_to_zero() {
		let record = ResultRecord::from(video(
			r#"{
				"id": "a",
				"snippet": {"publishedAt": "2024-01-01T00:00:00Z"},
				"statistics": {"viewCount": "42"}
			}"#,
		));
		assert_eq!(record.view_count, 42);
		assert_eq!(record.comment_count, 0);
	}

	#[test]
	fn unparseable_statistic_defaults_to_zero() {
		let record = ResultRecord::from(video(
			r#"{
				"id": "a",
				"snippet": {"publishedAt": "2024-01-01T00:00:00Z"},
				"statistics": {"viewCount": "lots", "commentCount": 3}
			}"#,
		));
		assert_eq!(record.view_count, 0);
		assert_eq!(record.comment_count, 3);
	}
}
