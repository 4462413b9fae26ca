// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! When to search again.
//!
//! A new search starts when the keyword changes to a non-empty value, or when
//! the sort order changes while a keyword is set. Starting a search cancels
//! the previous one, so only the latest query can deliver results.

use tokio_util::sync::CancellationToken;
use tracing::debug;
use vidscout_youtube::{SortOrder, DEFAULT_MAX_RESULTS};

use crate::error::ResolveError;
use crate::provider::VideoProvider;
use crate::query::SearchQuery;
use crate::record::ResultRecord;
use crate::resolver::Resolver;

#[derive(Debug)]
pub struct SearchSession {
	keyword: Option<String>,
	sort_order: SortOrder,
	max_results: u32,
	in_flight: Option<CancellationToken>,
}

/// A search the session decided to run, bound to its own cancellation token.
#[derive(Debug, Clone)]
pub struct PendingSearch {
	query: SearchQuery,
	cancel: CancellationToken,
}

impl PendingSearch {
	pub fn query(&self) -> &SearchQuery {
		&self.query
	}

	/// True once a newer search has superseded this one.
	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	pub async fn run<P: VideoProvider>(
		&self,
		resolver: &Resolver<P>,
	) -> Result<Vec<ResultRecord>, ResolveError> {
		resolver.resolve_with_cancel(&self.query, &self.cancel).await
	}
}

impl Default for SearchSession {
	fn default() -> Self {
		Self::new(SortOrder::default(), DEFAULT_MAX_RESULTS)
	}
}

impl SearchSession {
	pub fn new(sort_order: SortOrder, max_results: u32) -> Self {
		Self {
			keyword: None,
			sort_order,
			max_results,
			in_flight: None,
		}
	}

	pub fn keyword(&self) -> Option<&str> {
		self.keyword.as_deref()
	}

	pub fn sort_order(&self) -> SortOrder {
		self.sort_order
	}

	/// Returns a search to run if `keyword` is non-empty and differs from
	/// the current one.
	pub fn set_keyword(&mut self, keyword: &str) -> Option<PendingSearch> {
		let keyword = keyword.trim();
		if keyword.is_empty() || self.keyword.as_deref() == Some(keyword) {
			return None;
		}

		self.keyword = Some(keyword.to_string());
		self.start()
	}

	/// Records the new order; returns a search to run only if the order
	/// changed and a keyword is already set.
	pub fn set_sort_order(&mut self, sort_order: SortOrder) -> Option<PendingSearch> {
		if self.sort_order == sort_order {
			return None;
		}

		self.sort_order = sort_order;
		if self.keyword.is_none() {
			return None;
		}
		self.start()
	}

	/// Cancel whatever search is still running.
	pub fn cancel(&mut self) {
		if let Some(token) = self.in_flight.take() {
			token.cancel();
		}
	}

	fn start(&mut self) -> Option<PendingSearch> {
		let query = SearchQuery::new(self.keyword.as_deref()?)
			.ok()?
			.with_sort_order(self.sort_order)
			.with_max_results(self.max_results);

		self.cancel();
		let cancel = CancellationToken::new();
		self.in_flight = Some(cancel.clone());

		debug!(keyword = %query.keyword(), order = %query.sort_order(), "starting search");
		Some(PendingSearch { query, cancel })
	}
}
