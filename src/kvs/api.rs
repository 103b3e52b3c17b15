//! The storage-backend contract: every concrete adapter (`mem`, `rocksdb`) implements this trait.

use crate::err::Error;
use crate::key::debug::Sprintable;
use crate::kvs::{Check, Key, Val};
use std::fmt::Debug;
use std::ops::Range;

/// A single read/write transaction against one backend.
///
/// A transaction must be finished with [`Transaction::commit`] or [`Transaction::cancel`]; a
/// write transaction dropped without either is a bug, reported per [`Check`].
#[allow(async_fn_in_trait)]
pub trait Transaction {
	/// Set what happens when a write transaction is dropped unfinished.
	fn check_level(&mut self, check: Check);

	/// True once this transaction has been committed or cancelled.
	fn closed(&self) -> bool;

	/// True if this transaction may write.
	fn writeable(&self) -> bool;

	/// Cancel this transaction, discarding any writes.
	async fn cancel(&mut self) -> Result<(), Error>;

	/// Commit this transaction, making any writes visible.
	async fn commit(&mut self) -> Result<(), Error>;

	/// Check whether a key is present.
	async fn exists<K>(&mut self, key: K) -> Result<bool, Error>
	where
		K: Into<Key> + Sprintable + Debug;

	/// Fetch a key's value, if present.
	async fn get<K>(&mut self, key: K) -> Result<Option<Val>, Error>
	where
		K: Into<Key> + Sprintable + Debug;

	/// Unconditionally insert or overwrite a key.
	async fn set<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug;

	/// Insert a key only if it does not already exist.
	async fn put<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug;

	/// Insert a key only if its current value matches `chk` (or both are absent).
	async fn putc<K, V>(&mut self, key: K, val: V, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug;

	/// Delete a key unconditionally.
	async fn del<K>(&mut self, key: K) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug;

	/// Delete a key only if its current value matches `chk` (or both are absent).
	async fn delc<K, V>(&mut self, key: K, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug;

	/// List up to `limit` keys in `rng`, in ascending order.
	async fn keys<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<Key>, Error>
	where
		K: Into<Key> + Sprintable + Debug;

	/// List up to `limit` key/value pairs in `rng`, in ascending order.
	async fn scan<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<(Key, Val)>, Error>
	where
		K: Into<Key> + Sprintable + Debug;
}
