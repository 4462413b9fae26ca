// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for vidscout.
//!
//! This crate provides:
//! - A reqwest client builder carrying the `vidscout/<version>` User-Agent
//! - Retry with exponential backoff for transient upstream failures

mod client;
mod retry;

pub use client::{builder, new_client_with_timeout, user_agent};
pub use retry::{retry, RetryConfig, RetryableError};
