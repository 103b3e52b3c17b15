#![cfg(feature = "kv-mem")]

use crate::err::Error;
use crate::key::debug::Sprintable;
use crate::kvs::Check;
use crate::kvs::Key;
use crate::kvs::Val;
use std::fmt::Debug;
use std::ops::Range;

#[non_exhaustive]
pub struct Datastore {
	db: echodb::Database<Key, Val>,
}

#[non_exhaustive]
pub struct Transaction {
	/// Is the transaction complete?
	done: bool,
	/// Is the transaction writeable?
	write: bool,
	/// Should we check unhandled transactions?
	check: Check,
	/// The underlying datastore transaction
	inner: echodb::Transaction<Key, Val>,
}

impl Drop for Transaction {
	fn drop(&mut self) {
		if !self.done && self.write {
			if std::thread::panicking() {
				return;
			}
			match self.check {
				Check::None => {
					trace!("A transaction was dropped without being committed or cancelled");
				}
				Check::Warn => {
					warn!("A transaction was dropped without being committed or cancelled");
				}
				Check::Panic => {
					#[cfg(debug_assertions)]
					{
						let backtrace = std::backtrace::Backtrace::force_capture();
						if let std::backtrace::BacktraceStatus::Captured = backtrace.status() {
							println!("{}", backtrace);
						}
					}
					panic!("A transaction was dropped without being committed or cancelled");
				}
			}
		}
	}
}

impl Datastore {
	/// Open a new database
	pub(crate) async fn new() -> Result<Datastore, Error> {
		Ok(Datastore {
			db: echodb::new(),
		})
	}
	/// Start a new transaction
	pub(crate) async fn transaction(&self, write: bool) -> Result<Transaction, Error> {
		#[cfg(not(debug_assertions))]
		let check = Check::Warn;
		#[cfg(debug_assertions)]
		let check = Check::Panic;
		let inner = self.db.begin(write).await;
		Ok(Transaction {
			done: false,
			check,
			write,
			inner,
		})
	}
}

impl super::api::Transaction for Transaction {
	fn check_level(&mut self, check: Check) {
		self.check = check;
	}

	fn closed(&self) -> bool {
		self.done
	}

	fn writeable(&self) -> bool {
		self.write
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self))]
	async fn cancel(&mut self) -> Result<(), Error> {
		if self.done {
			return Err(Error::TxFinished);
		}
		self.done = true;
		self.inner.cancel().map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self))]
	async fn commit(&mut self) -> Result<(), Error> {
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.done = true;
		self.inner.commit().map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn exists<K>(&mut self, key: K) -> Result<bool, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		let res = self.inner.exists(key.into()).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(res)
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn get<K>(&mut self, key: K) -> Result<Option<Val>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		let res = self.inner.get(key.into()).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(res)
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn set<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.inner.set(key.into(), val.into()).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn put<K, V>(&mut self, key: K, val: V) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.inner.put(key.into(), val.into()).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn putc<K, V>(&mut self, key: K, val: V, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.inner
			.putc(key.into(), val.into(), chk.map(Into::into))
			.map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn del<K>(&mut self, key: K) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.inner.del(key.into()).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self), fields(key = key.sprint()))]
	async fn delc<K, V>(&mut self, key: K, chk: Option<V>) -> Result<(), Error>
	where
		K: Into<Key> + Sprintable + Debug,
		V: Into<Val> + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		if !self.write {
			return Err(Error::TxReadonly);
		}
		self.inner
			.delc(key.into(), chk.map(Into::into))
			.map_err(|e| Error::MemError(e.to_string()))?;
		Ok(())
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self, rng))]
	async fn keys<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<Key>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		let rng: Range<Key> = Range {
			start: rng.start.into(),
			end: rng.end.into(),
		};
		let res = self.inner.keys(rng, limit as usize).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(res)
	}

	#[instrument(level = "trace", target = "hyperstore::kvs::api", skip(self, rng))]
	async fn scan<K>(&mut self, rng: Range<K>, limit: u32) -> Result<Vec<(Key, Val)>, Error>
	where
		K: Into<Key> + Sprintable + Debug,
	{
		if self.done {
			return Err(Error::TxFinished);
		}
		let rng: Range<Key> = Range {
			start: rng.start.into(),
			end: rng.end.into(),
		};
		let res = self.inner.scan(rng, limit as usize).map_err(|e| Error::MemError(e.to_string()))?;
		Ok(res)
	}
}
