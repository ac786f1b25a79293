//! User preferences kept in the browser's `localStorage`.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use web_sys::Storage;

/// Why a preference could not be read or written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
	/// No window or storage is disabled.
	#[error("local storage is unavailable")]
	Unavailable,
	/// Nothing stored under the key yet.
	#[error("no value stored for {0:?}")]
	Missing(String),
	/// A stored value did not parse.
	#[error("invalid value for {key:?}: {reason}")]
	Invalid {
		/// Storage key.
		key: String,
		/// Parser message.
		reason: String,
	},
	/// The browser rejected the operation.
	#[error("storage operation failed: {0}")]
	Js(String),
}

fn local_storage() -> Result<Storage, StorageError> {
	web_sys::window()
		.ok_or(StorageError::Unavailable)?
		.local_storage()
		.map_err(|e| StorageError::Js(format!("{e:?}")))?
		.ok_or(StorageError::Unavailable)
}

/// Parse a raw stored value for `key`.
pub fn parse<T>(key: &str, raw: Option<String>) -> Result<T, StorageError>
where
	T: FromStr,
	T::Err: Display,
{
	let raw = raw.ok_or_else(|| StorageError::Missing(key.to_owned()))?;
	raw.parse().map_err(|e: T::Err| StorageError::Invalid {
		key: key.to_owned(),
		reason: e.to_string(),
	})
}

/// Read and parse the value stored under `key`.
pub fn load<T>(key: &str) -> Result<T, StorageError>
where
	T: FromStr,
	T::Err: Display,
{
	let raw = local_storage()?
		.get_item(key)
		.map_err(|e| StorageError::Js(format!("{e:?}")))?;
	parse(key, raw)
}

/// Store `value` under `key` using its `Display` form.
pub fn store<T: Display>(key: &str, value: &T) -> Result<(), StorageError> {
	local_storage()?
		.set_item(key, &value.to_string())
		.map_err(|e| StorageError::Js(format!("{e:?}")))
}
