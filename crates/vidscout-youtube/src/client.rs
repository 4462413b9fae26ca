// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! YouTube Data API client implementation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, trace};
use vidscout_common_http::{retry, RetryConfig};
use vidscout_common_secret::SecretString;

use crate::error::YouTubeError;
use crate::types::{ApiErrorEnvelope, SearchListResponse, SearchRequest, VideoListResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Parts requested from the `videos` endpoint.
const VIDEO_PARTS: &str = "snippet,statistics";

/// Client for the `search` and `videos` endpoints of the YouTube Data API.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
	retry_config: RetryConfig,
}

impl YouTubeClient {
	/// Creates a client with the default 10 second request timeout.
	pub fn new(api_key: impl Into<SecretString>) -> Result<Self, YouTubeError> {
		Self::with_timeout(api_key, REQUEST_TIMEOUT)
	}

	pub fn with_timeout(
		api_key: impl Into<SecretString>,
		timeout: Duration,
	) -> Result<Self, YouTubeError> {
		let http_client = vidscout_common_http::new_client_with_timeout(timeout)?;

		Ok(Self {
			http_client,
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
			retry_config: RetryConfig::default(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
		self.retry_config = config;
		self
	}

	/// `GET /search` restricted to videos.
	#[instrument(
		skip(self, request),
		fields(query = %request.query, order = %request.order, max_results = request.max_results)
	)]
	pub async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, YouTubeError> {
		let params = [
			("part", "snippet".to_string()),
			("q", request.query.clone()),
			("maxResults", request.max_results.to_string()),
			("type", "video".to_string()),
			("order", request.order.as_str().to_string()),
		];

		let response: SearchListResponse =
			retry(&self.retry_config, || self.get_json("search", &params)).await?;

		debug!(item_count = response.items.len(), "search completed");
		Ok(response)
	}

	/// `GET /videos` for all `ids` in one batched request.
	#[instrument(skip(self, ids), fields(id_count = ids.len()))]
	pub async fn videos(&self, ids: &[String]) -> Result<VideoListResponse, YouTubeError> {
		let params = [("id", ids.join(",")), ("part", VIDEO_PARTS.to_string())];

		let response: VideoListResponse =
			retry(&self.retry_config, || self.get_json("videos", &params)).await?;

		debug!(item_count = response.items.len(), "video lookup completed");
		Ok(response)
	}

	fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url, YouTubeError> {
		let raw = format!("{}/{endpoint}", self.base_url.trim_end_matches('/'));
		let mut url =
			Url::parse(&raw).map_err(|e| YouTubeError::InvalidBaseUrl(format!("{raw}: {e}")))?;

		{
			let mut pairs = url.query_pairs_mut();
			pairs.append_pair("key", self.api_key.expose());
			for (name, value) in params {
				pairs.append_pair(name, value);
			}
		}

		Ok(url)
	}

	async fn get_json<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		params: &[(&str, String)],
	) -> Result<T, YouTubeError> {
		let url = self.endpoint_url(endpoint, params)?;

		// The full URL carries the key; only the endpoint is logged.
		debug!(base_url = %self.base_url, endpoint, "sending request to YouTube");
		trace!(params = ?params, "request parameters");

		let response = self.http_client.get(url).send().await.map_err(|e| {
			if e.is_timeout() {
				error!(endpoint, "request timed out");
				return YouTubeError::Timeout;
			}
			let e = e.without_url();
			error!(error = %e, endpoint, "network error during YouTube request");
			YouTubeError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, endpoint, "received response from YouTube");

		let body = response.text().await.map_err(|e| {
			let e = e.without_url();
			error!(error = %e, "failed to read response body");
			YouTubeError::Network(e)
		})?;

		if !status.is_success() {
			let err = classify_error(status.as_u16(), &body);
			error!(status = status.as_u16(), error = %err, endpoint, "YouTube API error");
			return Err(err);
		}

		trace!(body = %body, "response body");

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, endpoint, "failed to parse YouTube response");
			YouTubeError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

/// Map a non-success response to an error using the Google error envelope
/// when the body carries one.
fn classify_error(status: u16, body: &str) -> YouTubeError {
	let envelope = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
	let reasons: Vec<String> = envelope
		.as_ref()
		.map(|e| e.error.errors.iter().map(|d| d.reason.clone()).collect())
		.unwrap_or_default();
	let message = envelope
		.as_ref()
		.map(|e| e.error.message.clone())
		.filter(|m| !m.is_empty())
		.unwrap_or_else(|| body.to_string());
	let status = envelope
		.as_ref()
		.map(|e| e.error.code)
		.filter(|code| *code != 0)
		.unwrap_or(status);

	let has_reason = |wanted: &[&str]| reasons.iter().any(|r| wanted.contains(&r.as_str()));

	if has_reason(&["quotaExceeded", "dailyLimitExceeded"]) {
		return YouTubeError::QuotaExceeded;
	}
	if status == 429 || has_reason(&["rateLimitExceeded", "userRateLimitExceeded"]) {
		return YouTubeError::RateLimited;
	}
	if status == 401 || has_reason(&["keyInvalid", "forbidden"]) {
		return YouTubeError::Unauthorized;
	}
	if status == 403 {
		let lower = message.to_lowercase();
		if lower.contains("quota") {
			return YouTubeError::QuotaExceeded;
		}
		if lower.contains("rate") || lower.contains("limit") {
			return YouTubeError::RateLimited;
		}
		return YouTubeError::Unauthorized;
	}

	YouTubeError::ApiError { status, message }
}
