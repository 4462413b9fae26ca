// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Common configuration primitives for vidscout.
//!
//! - [`Secret<T>`] re-exported from [`vidscout_common_secret`]
//! - [`load_secret_env`] / [`load_first_secret_env`] for reading credentials
//!   from `VAR` or `VAR_FILE`

pub mod env;

pub use vidscout_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_first_secret_env, load_secret_env, SecretEnvError};
