// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validated search input.

use vidscout_youtube::{SearchRequest, SortOrder, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT};

use crate::error::QueryError;

/// A keyword search ready to be resolved.
///
/// The keyword is trimmed and never empty; `max_results` always lies in
/// `1..=MAX_RESULTS_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	keyword: String,
	sort_order: SortOrder,
	max_results: u32,
}

impl SearchQuery {
	pub fn new(keyword: impl AsRef<str>) -> Result<Self, QueryError> {
		let keyword = keyword.as_ref().trim();
		if keyword.is_empty() {
			return Err(QueryError::EmptyKeyword);
		}

		Ok(Self {
			keyword: keyword.to_string(),
			sort_order: SortOrder::default(),
			max_results: DEFAULT_MAX_RESULTS,
		})
	}

	pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
		self.sort_order = sort_order;
		self
	}

	pub fn with_max_results(mut self, max_results: u32) -> Self {
		self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
		self
	}

	pub fn keyword(&self) -> &str {
		&self.keyword
	}

	pub fn sort_order(&self) -> SortOrder {
		self.sort_order
	}

	pub fn max_results(&self) -> u32 {
		self.max_results
	}

	pub(crate) fn to_request(&self) -> SearchRequest {
		SearchRequest::new(self.keyword.clone(), self.sort_order, self.max_results)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn defaults() {
		let query = SearchQuery::new("lofi").unwrap();
		assert_eq!(query.keyword(), "lofi");
		assert_eq!(query.sort_order(), SortOrder::Relevance);
		assert_eq!(query.max_results(), DEFAULT_MAX_RESULTS);
	}

	#[test]
	fn empty_or_blank_keyword_is_rejected() {
		assert_eq!(SearchQuery::new(""), Err(QueryError::EmptyKeyword));
		assert_eq!(SearchQuery::new(" \t\n"), Err(QueryError::EmptyKeyword));
	}

	#[test]
	fn request_carries_order_and_limit() {
		let request = SearchQuery::new("  synthwave ")
			.unwrap()
			.with_sort_order(SortOrder::Rating)
			.with_max_results(25)
			.to_request();
		assert_eq!(request.query, "synthwave");
		assert_eq!(request.order, SortOrder::Rating);
		assert_eq!(request.max_results, 25);
	}

	proptest! {
		#[test]
		fn max_results_always_in_range(n in any::<u32>()) {
			let query = SearchQuery::new("x").unwrap().with_max_results(n);
			prop_assert!((1..=MAX_RESULTS_LIMIT).contains(&query.max_results()));
		}

		#[test]
		fn keyword_is_trimmed_and_nonempty(keyword in "\\s*[a-z0-9]{1,20}\\s*") {
			let query = SearchQuery::new(&keyword).unwrap();
			prop_assert_eq!(query.keyword(), keyword.trim());
		}
	}
}
