//! The key-value storage layer: a backend-agnostic [`Transaction`] contract and two concrete
//! backends, selected by Cargo feature.

pub mod api;
#[cfg(feature = "kv-mem")]
pub mod mem;
#[cfg(feature = "kv-rocksdb")]
pub mod rocksdb;
pub mod tr;

pub use api::Transaction;
pub use tr::{Check, TransactionType, Transactor};

use crate::err::Error;

/// A raw storage key.
pub type Key = Vec<u8>;
/// A raw storage value.
pub type Val = Vec<u8>;

/// An open connection to one backend, able to start transactions against it.
pub enum Datastore {
	#[cfg(feature = "kv-mem")]
	Mem(mem::Datastore),
	#[cfg(feature = "kv-rocksdb")]
	RocksDb(rocksdb::Datastore),
}

impl Datastore {
	/// Open a datastore for the backend named `backend`, located at `hg` (the filesystem path for
	/// `rocksdb`; ignored for `mem`). Recognised backend names are validated at runtime; anything
	/// else, including a name naming a backend not compiled into this build, is
	/// [`Error::UnknownBackend`].
	pub async fn new(backend: &str, hg: &str) -> Result<Datastore, Error> {
		match backend {
			"mem" => {
				#[cfg(feature = "kv-mem")]
				{
					Ok(Datastore::Mem(mem::Datastore::new().await?))
				}
				#[cfg(not(feature = "kv-mem"))]
				{
					Err(Error::UnknownBackend(format!("{backend} (not enabled in this build)")))
				}
			}
			"rocksdb" => {
				#[cfg(feature = "kv-rocksdb")]
				{
					Ok(Datastore::RocksDb(rocksdb::Datastore::new(hg).await?))
				}
				#[cfg(not(feature = "kv-rocksdb"))]
				{
					let _ = hg;
					Err(Error::UnknownBackend(format!("{backend} (not enabled in this build)")))
				}
			}
			other => Err(Error::UnknownBackend(other.to_string())),
		}
	}

	/// Start a new transaction.
	pub async fn transaction(&self, write: bool) -> Result<Transactor, Error> {
		let inner = match self {
			#[cfg(feature = "kv-mem")]
			Datastore::Mem(ds) => tr::Inner::Mem(ds.transaction(write).await?),
			#[cfg(feature = "kv-rocksdb")]
			Datastore::RocksDb(ds) => tr::Inner::RocksDb(ds.transaction(write).await?),
		};
		Ok(Transactor { inner })
	}
}
