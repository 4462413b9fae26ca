// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The upstream seam the resolver talks to.

use std::sync::Arc;

use async_trait::async_trait;
use vidscout_youtube::{SearchRequest, Video, YouTubeClient, YouTubeError};

/// A source of video ids and video metadata.
///
/// [`YouTubeClient`] is the production implementation; tests substitute
/// in-memory stubs.
#[async_trait]
pub trait VideoProvider: Send + Sync {
	/// Ids of the videos matching `request`, in the provider's ranking order.
	async fn search_video_ids(&self, request: &SearchRequest) -> Result<Vec<String>, YouTubeError>;

	/// Metadata for all `ids`, fetched in a single request.
	async fn fetch_videos(&self, ids: &[String]) -> Result<Vec<Video>, YouTubeError>;
}

#[async_trait]
impl VideoProvider for YouTubeClient {
	async fn search_video_ids(&self, request: &SearchRequest) -> Result<Vec<String>, YouTubeError> {
		Ok(self.search(request).await?.video_ids())
	}

	async fn fetch_videos(&self, ids: &[String]) -> Result<Vec<Video>, YouTubeError> {
		Ok(self.videos(ids).await?.items)
	}
}

#[async_trait]
impl<P> VideoProvider for Arc<P>
where
	P: VideoProvider + ?Sized,
{
	async fn search_video_ids(&self, request: &SearchRequest) -> Result<Vec<String>, YouTubeError> {
		(**self).search_video_ids(request).await
	}

	async fn fetch_videos(&self, ids: &[String]) -> Result<Vec<Video>, YouTubeError> {
		(**self).fetch_videos(ids).await
	}
}
