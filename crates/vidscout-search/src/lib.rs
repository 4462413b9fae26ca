// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search pipeline for vidscout.
//!
//! A [`SearchQuery`] goes through the [`Resolver`] in two sequential stages:
//! the provider's search endpoint returns video ids, then a single batched
//! metadata lookup turns them into [`ResultRecord`]s. [`SearchSession`]
//! decides when a keyword or sort change should start a new search and
//! cancels the one it supersedes.

pub mod error;
pub mod provider;
pub mod query;
pub mod record;
pub mod resolver;
pub mod session;

pub use error::{QueryError, ResolveError, Stage};
pub use provider::VideoProvider;
pub use query::SearchQuery;
pub use record::ResultRecord;
pub use resolver::{Resolver, ResolverOptions};
pub use session::{PendingSearch, SearchSession};
pub use tokio_util::sync::CancellationToken;
pub use vidscout_youtube::{SortOrder, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT};
