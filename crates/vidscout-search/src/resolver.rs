// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Two-stage search: keyword to ids, ids to records.

use std::collections::HashMap;
use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use vidscout_youtube::YouTubeError;

use crate::error::{ResolveError, Stage};
use crate::provider::VideoProvider;
use crate::query::SearchQuery;
use crate::record::ResultRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
	/// Reorder metadata results to match the id order of the search stage.
	/// When false the metadata response order is kept as-is.
	pub preserve_search_order: bool,
}

impl Default for ResolverOptions {
	fn default() -> Self {
		Self {
			preserve_search_order: true,
		}
	}
}

/// Resolves a [`SearchQuery`] into an ordered list of [`ResultRecord`]s.
///
/// Holds no per-query state; one resolver can serve any number of
/// sequential or concurrent queries.
#[derive(Debug)]
pub struct Resolver<P> {
	provider: P,
	options: ResolverOptions,
}

impl<P: VideoProvider> Resolver<P> {
	pub fn new(provider: P) -> Self {
		Self {
			provider,
			options: ResolverOptions::default(),
		}
	}

	pub fn with_options(mut self, options: ResolverOptions) -> Self {
		self.options = options;
		self
	}

	pub fn options(&self) -> &ResolverOptions {
		&self.options
	}

	pub async fn resolve(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>, ResolveError> {
		self.resolve_with_cancel(query, &CancellationToken::new()).await
	}

	/// Run the pipeline, abandoning the in-flight request as soon as
	/// `cancel` fires.
	///
	/// An empty search result is a success and skips the metadata request.
	/// A failure in either stage aborts with no partial results.
	#[instrument(
		skip(self, query, cancel),
		fields(keyword = %query.keyword(), order = %query.sort_order(), max_results = query.max_results())
	)]
	pub async fn resolve_with_cancel(
		&self,
		query: &SearchQuery,
		cancel: &CancellationToken,
	) -> Result<Vec<ResultRecord>, ResolveError> {
		let request = query.to_request();
		let ids = run_stage(
			Stage::Search,
			cancel,
			self.provider.search_video_ids(&request),
		)
		.await?;

		if ids.is_empty() {
			debug!("search returned no videos");
			return Ok(Vec::new());
		}
		debug!(id_count = ids.len(), "search stage complete");

		let videos = run_stage(Stage::Metadata, cancel, self.provider.fetch_videos(&ids)).await?;

		let mut records: Vec<ResultRecord> = videos.into_iter().map(ResultRecord::from).collect();
		if self.options.preserve_search_order {
			order_by_ids(&mut records, &ids);
		}

		debug!(
			requested = ids.len(),
			result_count = records.len(),
			"search resolved"
		);
		Ok(records)
	}
}

async fn run_stage<T>(
	stage: Stage,
	cancel: &CancellationToken,
	call: impl Future<Output = Result<T, YouTubeError>>,
) -> Result<T, ResolveError> {
	tokio::select! {
		biased;
		_ = cancel.cancelled() => {
			debug!(%stage, "search cancelled");
			Err(ResolveError::Cancelled)
		}
		result = call => result.map_err(|source| ResolveError::Upstream { stage, source }),
	}
}

/// Stable sort into `ids` order; records whose id was not requested go last.
fn order_by_ids(records: &mut [ResultRecord], ids: &[String]) {
	let position: HashMap<&str, usize> = ids
		.iter()
		.enumerate()
		.map(|(index, id)| (id.as_str(), index))
		.collect();

	records.sort_by_key(|record| {
		position
			.get(record.id.as_str())
			.copied()
			.unwrap_or(usize::MAX)
	});
}
