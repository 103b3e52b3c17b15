use thiserror::Error;

/// An error originating from the store's key codec, backend adapter, or public API.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// An edge or atom failed a well-formedness check (arity, forbidden character, non-canonical
	/// rendering).
	#[error("not well-formed: {0}")]
	NotWellFormed(String),

	/// `permutate` was called with `k` outside `0..n!`.
	#[error("permutation index {k} out of range for a tuple of length {n}")]
	OutOfRange {
		k: u64,
		n: usize,
	},

	/// The transaction or graph handle has already been committed, cancelled, or closed.
	#[error("transaction already finished")]
	TxFinished,

	/// A mutating method was called on a transaction opened as read-only.
	#[error("transaction is read-only")]
	TxReadonly,

	/// A `put`-style conditional write found an existing value, or no value, where the opposite
	/// was required.
	#[error("value already set for key")]
	TxKeyAlreadyExists,

	/// A conditional `putc`/`delc` found a current value that did not match the expected check
	/// value.
	#[error("value did not match expected condition")]
	TxConditionNotMet,

	/// The `HyperGraph` handle has been closed or destroyed.
	#[error("the graph handle is closed")]
	Closed,

	/// Attribute record bytes could not be decoded.
	#[error("corrupt attribute record: {0}")]
	CorruptRecord(String),

	/// An unrecognised backend name was supplied at construction time.
	#[error("unknown backend: {0}")]
	UnknownBackend(String),

	/// The in-memory backend returned an error.
	#[cfg(feature = "kv-mem")]
	#[error("memory backend error: {0}")]
	MemError(String),

	/// The RocksDB backend returned an error.
	#[cfg(feature = "kv-rocksdb")]
	#[error("rocksdb error: {0}")]
	RocksDb(#[from] rocksdb::Error),

	/// The key codec failed to encode or decode a key.
	#[error("key codec error: {0}")]
	KeyCodec(String),
}
