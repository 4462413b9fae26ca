// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials such as the YouTube Data API key.
//!
//! A [`Secret<T>`] prints as `[REDACTED]` through `Debug`, `Display` and
//! `Serialize`, so it can sit inside config structs that get logged or
//! dumped. The value is zeroized on drop and is only reachable through
//! [`Secret::expose`].
//!
//! ```
//! use vidscout_common_secret::Secret;
//!
//! let key = Secret::new("AIza-example".to_string());
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.expose(), "AIza-example");
//! ```

use std::fmt;

use zeroize::Zeroize;

/// Placeholder written wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Access the wrapped value. Every call site that needs the raw
	/// credential goes through here.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl Secret<String> {
	/// True when the credential is empty or whitespace only.
	pub fn is_blank(&self) -> bool {
		self.inner.trim().is_empty()
	}
}

impl From<String> for Secret<String> {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for Secret<String> {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self::new(self.inner.clone())
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	use super::{Secret, REDACTED};

	impl<T> Serialize for Secret<T>
	where
		T: Serialize + Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_and_display_are_redacted() {
		let key = Secret::new("AIzaSyExampleKey".to_string());
		assert_eq!(format!("{key}"), REDACTED);
		let debug = format!("{key:?}");
		assert!(debug.contains(REDACTED));
		assert!(!debug.contains("AIzaSyExampleKey"));
	}

	#[test]
	fn option_secret_debug_is_redacted() {
		let key: Option<SecretString> = Some("AIzaSyExampleKey".into());
		assert!(!format!("{key:?}").contains("AIzaSyExampleKey"));
	}

	#[test]
	fn expose_and_clone_keep_value() {
		let key = Secret::new("k".to_string());
		assert_eq!(key.clone().expose(), "k");
		assert_eq!(key, Secret::new("k".to_string()));
	}

	#[test]
	fn blank_detection() {
		assert!(SecretString::from("   ").is_blank());
		assert!(SecretString::from("").is_blank());
		assert!(!SecretString::from("abc").is_blank());
	}

	#[test]
	fn serialize_is_redacted_and_deserialize_reads_value() {
		let json = serde_json::to_string(&SecretString::from("AIzaSyExampleKey")).unwrap();
		assert_eq!(json, format!("\"{REDACTED}\""));

		let parsed: SecretString = serde_json::from_str("\"AIzaSyExampleKey\"").unwrap();
		assert_eq!(parsed.expose(), "AIzaSyExampleKey");
	}

	proptest! {
		#[test]
		fn rendered_forms_never_contain_secret(inner in "[a-zA-Z0-9_-]{3,40}") {
			prop_assume!(!REDACTED.contains(inner.as_str()));
			let secret = Secret::new(inner.clone());
			let shown = secret.to_string();
			let debug = format!("{:?}", secret);
			let json = serde_json::to_string(&secret).unwrap();
			prop_assert!(!shown.contains(&inner));
			prop_assert!(!debug.contains(&inner));
			prop_assert!(!json.contains(&inner));
		}
	}
}
