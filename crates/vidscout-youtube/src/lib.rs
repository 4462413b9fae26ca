// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! YouTube Data API v3 client for vidscout.
//!
//! Wraps the two endpoints the search pipeline needs: `search` (keyword to
//! video ids) and `videos` (ids to snippet and statistics), with typed
//! responses and error classification.

pub mod client;
pub mod error;
pub mod types;

pub use client::{YouTubeClient, DEFAULT_BASE_URL};
pub use error::YouTubeError;
pub use types::{
	Count, ParseSortOrderError, SearchListResponse, SearchRequest, SortOrder, Thumbnail, Thumbnails, Video,
	VideoListResponse, VideoSnippet, VideoStatistics, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT,
};
pub use vidscout_common_http::RetryConfig;
