//! Dispatches the [`Transaction`] trait over whichever backend a [`crate::graph::HyperGraph`] was
//! opened against.

use crate::err::Error;
use crate::key::debug::Sprintable;
use crate::kvs::{Key, Val};
use std::fmt::Debug;
use std::ops::Range;

/// What to do when a write transaction is dropped without being committed or cancelled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Check {
	/// Do nothing.
	#[default]
	None,
	/// Log a warning.
	Warn,
	/// Panic (debug builds only use this by default).
	Panic,
}

/// Whether a transaction may write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionType {
	Read,
	Write,
}

impl From<TransactionType> for bool {
	fn from(t: TransactionType) -> bool {
		matches!(t, TransactionType::Write)
	}
}

macro_rules! expand_inner {
	($this:expr, $method:ident ( $($arg:expr),* )) => {
		match $this {
			#[cfg(feature = "kv-mem")]
			Inner::Mem(tx) => tx.$method($($arg),*).await,
			#[cfg(feature = "kv-rocksdb")]
			Inner::RocksDb(tx) => tx.$method($($arg),*).await,
		}
	};
}

pub(crate) enum Inner {
	#[cfg(feature = "kv-mem")]
	Mem(crate::kvs::mem::Transaction),
	#[cfg(feature = "kv-rocksdb")]
	RocksDb(crate::kvs::rocksdb::Transaction),
}

/// A backend-agnostic handle to one transaction.
pub struct Transactor {
	pub(crate) inner: Inner,
}

impl Transactor {
	pub fn check_level(&mut self, check: Check) {
		match &mut self.inner {
			#[cfg(feature = "kv-mem")]
			Inner::Mem(tx) => super::api::Transaction::check_level(tx, check),
			#[cfg(feature = "kv-rocksdb")]
			Inner::RocksDb(tx) => super::api::Transaction::check_level(tx, check),
		}
	}

	pub fn closed(&self) -> bool {
		match &self.inner {
			#[cfg(feature = "kv-mem")]
			Inner::Mem(tx) => super::api::Transaction::closed(tx),
			#[cfg(feature = "kv-rocksdb")]
			Inner::RocksDb(tx) => super::api::Transaction::closed(tx),
		}
	}

	pub fn writeable(&self) -> bool {
		match &self.inner {
			#[cfg(feature = "kv-mem")]
			Inner::Mem(tx) => super::api::Transaction::writeable(tx),
			#[cfg(feature = "kv-rocksdb")]
			Inner::RocksDb(tx) => super::api::Transaction::writeable(tx),
		}
	}

	pub async fn cancel(&mut self) -> Result<(), Error> {
		use super::api::Transaction;
		expand_inner!(&mut self.inner, cancel())
	}

	pub async fn commit(&mut self) -> Result<(), Error> {
		use super::api::Transaction;
		expand_inner!(&mut self.inner, commit())
	}

	pub async fn exists<K>(&mut self, key: K) -> Result<bool, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, exists(key))
	}

	pub async fn get<K>(&mut self, key: K) -> Result<Option<Val>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, get(key))
	}

	pub async fn set<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, set(key, val))
	}

	pub async fn put<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, put(key, val))
	}

	pub async fn putc<K, V>(&mut self, key: K, val: V, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, putc(key, val, chk))
	}

	pub async fn del<K>(&mut self, key: K) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, del(key))
	}

	pub async fn delc<K, V>(&mut self, key: K, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, delc(key, chk))
	}

	pub async fn keys<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<Key>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, keys(rng, limit))
	}

	pub async fn scan<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<(Key, Val)>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		use super::api::Transaction;
		expand_inner!(&mut self.inner, scan(rng, limit))
	}
}
