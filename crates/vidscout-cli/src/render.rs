// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning result records into terminal text or JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use vidscout_format::{format_compact_number, format_relative_date_from};
use vidscout_search::ResultRecord;

/// A record plus its display strings, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct RenderedRecord<'a> {
	#[serde(flatten)]
	pub record: &'a ResultRecord,
	pub url: String,
	pub views: String,
	pub comments: String,
	pub published: String,
}

impl<'a> RenderedRecord<'a> {
	pub fn new(record: &'a ResultRecord, now: DateTime<Utc>) -> Self {
		Self {
			record,
			url: record.watch_url(),
			views: format_compact_number(record.view_count),
			comments: format_compact_number(record.comment_count),
			published: format_relative_date_from(record.published_at, now),
		}
	}
}

/// Longest description excerpt shown in text output, in characters.
const DESCRIPTION_CHARS: usize = 100;

/// Title, a summary line, a description excerpt when there is one, and the
/// watch link.
pub fn render_text(records: &[ResultRecord], now: DateTime<Utc>) -> String {
	let mut out = String::new();
	for (index, record) in records.iter().enumerate() {
		let r = RenderedRecord::new(record, now);
		if index > 0 {
			out.push('\n');
		}
		out.push_str(&format!(
			"{}\n  {} • {} views • {} comments • {}\n",
			record.title, record.channel, r.views, r.comments, r.published
		));
		if let Some(excerpt) = description_excerpt(&record.description) {
			out.push_str(&format!("  {excerpt}\n"));
		}
		out.push_str(&format!("  {}\n", r.url));
	}
	out
}

/// First non-blank line of `description`, cut to [`DESCRIPTION_CHARS`].
fn description_excerpt(description: &str) -> Option<String> {
	let line = description.lines().map(str::trim).find(|line| !line.is_empty())?;
	match line.char_indices().nth(DESCRIPTION_CHARS) {
		None => Some(line.to_string()),
		Some((cut, _)) => Some(format!("{}…", line[..cut].trim_end())),
	}
}

pub fn render_json(records: &[ResultRecord], now: DateTime<Utc>) -> serde_json::Result<String> {
	let rendered: Vec<RenderedRecord<'_>> = records
		.iter()
		.map(|record| RenderedRecord::new(record, now))
		.collect();
	serde_json::to_string_pretty(&rendered)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Duration, TimeZone};

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
	}

	fn record(id: &str, views: u64, comments: u64, age: Duration) -> ResultRecord {
		ResultRecord {
			id: id.to_string(),
			title: format!("Video {id}"),
			description: String::new(),
			channel: "Lofi Girl".to_string(),
			thumbnail_url: format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg"),
			published_at: now() - age,
			view_count: views,
			comment_count: comments,
		}
	}

	#[test]
	fn text_shows_formatted_fields() {
		let records = vec![record("abc", 1_500, 12_345, Duration::days(3))];
		let text = render_text(&records, now());

		assert_eq!(
			text,
			"Video abc\n  Lofi Girl • 1.5K views • 12K comments • 3 days ago\n  https://youtu.be/abc\n"
		);
	}

	#[test]
	fn text_includes_first_description_line() {
		let mut video = record("abc", 1_500, 12_345, Duration::days(3));
		video.description = "\n  Chill beats to study to  \nSecond line\n".to_string();
		let text = render_text(&[video], now());

		assert_eq!(
			text,
			"Video abc\n  Lofi Girl • 1.5K views • 12K comments • 3 days ago\n  Chill beats to study to\n  https://youtu.be/abc\n"
		);
	}

	#[test]
	fn long_descriptions_are_cut_on_char_boundaries() {
		let exact = "é".repeat(DESCRIPTION_CHARS);
		assert_eq!(description_excerpt(&exact), Some(exact.clone()));

		let long = format!("{exact}ü and more");
		let excerpt = description_excerpt(&long).unwrap();
		assert_eq!(excerpt, format!("{exact}…"));
		assert_eq!(excerpt.chars().count(), DESCRIPTION_CHARS + 1);

		assert_eq!(description_excerpt(" \n\t\n"), None);
	}

	#[test]
	fn text_separates_records_with_blank_line() {
		let records = vec![
			record("a", 1, 0, Duration::hours(2)),
			record("b", 2_750_000, 1, Duration::days(400)),
		];
		let text = render_text(&records, now());

		assert!(text.contains("1 views • 0 comments • 2 hours ago"));
		assert!(text.contains("2.8M views • 1 comments • 1 year ago"));
		assert!(text.contains("youtu.be/a\n\nVideo b"));
	}

	#[test]
	fn empty_list_renders_nothing() {
		assert_eq!(render_text(&[], now()), "");
		assert_eq!(render_json(&[], now()).unwrap(), "[]");
	}

	#[test]
	fn json_keeps_raw_fields_and_adds_display_ones() {
		let records = vec![record("xyz", 999_949, 0, Duration::seconds(90))];
		let json = render_json(&records, now()).unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();

		let item = &value[0];
		assert_eq!(item["id"], "xyz");
		assert_eq!(item["view_count"], 999_949);
		assert_eq!(item["views"], "1000K");
		assert_eq!(item["published"], "2 minutes ago");
		assert_eq!(item["url"], "https://youtu.be/xyz");
	}
}
