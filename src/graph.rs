//! The public embedded hypergraph store.

use crate::attr::{AttrRecord, AttrValue};
use crate::elem::Element;
use crate::err::Error;
use crate::index;
use crate::kvs::Datastore;

/// Construction options for [`HyperGraph::new`]: `backend` names the storage engine (`"mem"` or
/// `"rocksdb"`), `hg` is its location — the filesystem path for `rocksdb`, ignored for `mem`.
/// An unrecognised or not-compiled-in `backend` raises [`Error::UnknownBackend`].
#[derive(Clone, Debug, Default)]
pub struct Config {
	pub backend: String,
	pub hg: String,
}

/// An open handle to a hypergraph store.
pub struct HyperGraph {
	ds: Datastore,
}

impl HyperGraph {
	/// Open a store per `config`, validating `config.backend` at runtime.
	pub async fn new(config: Config) -> Result<HyperGraph, Error> {
		Ok(HyperGraph {
			ds: Datastore::new(&config.backend, &config.hg).await?,
		})
	}

	/// Close this handle. Currently a no-op beyond dropping the underlying datastore; present so
	/// callers have an explicit, symmetrical lifecycle with [`HyperGraph::new`].
	pub async fn close(self) -> Result<(), Error> {
		Ok(())
	}

	/// Add an edge, returning `true` if it was not already present.
	#[instrument(level = "debug", target = "hyperstore::graph", skip(self))]
	pub async fn add(&self, edge: &Element) -> Result<bool, Error> {
		let mut tx = self.ds.transaction(true).await?;
		let added = match index::add(&mut tx, edge).await {
			Ok(added) => added,
			Err(e) => {
				tx.cancel().await?;
				return Err(e);
			}
		};
		tx.commit().await?;
		Ok(added)
	}

	/// Remove an edge, returning `true` if it was present.
	#[instrument(level = "debug", target = "hyperstore::graph", skip(self))]
	pub async fn remove(&self, edge: &Element) -> Result<bool, Error> {
		let mut tx = self.ds.transaction(true).await?;
		let removed = match index::remove(&mut tx, edge).await {
			Ok(removed) => removed,
			Err(e) => {
				tx.cancel().await?;
				return Err(e);
			}
		};
		tx.commit().await?;
		Ok(removed)
	}

	/// Whether an edge is present.
	pub async fn exists(&self, edge: &Element) -> Result<bool, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::exists(&mut tx, edge).await;
		tx.cancel().await?;
		res
	}

	/// Every stored edge matching `pattern`. See [`index::pattern2edges`].
	pub async fn pattern2edges(
		&self,
		pattern: &[Option<Element>],
		open_ended: bool,
	) -> Result<Vec<Element>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::pattern2edges(&mut tx, pattern, open_ended).await;
		tx.cancel().await?;
		res
	}

	/// Every stored edge directly containing `element`, up to `limit` distinct edges.
	pub async fn star(&self, element: &Element, limit: Option<usize>) -> Result<Vec<Element>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::star(&mut tx, element, limit).await;
		tx.cancel().await?;
		res
	}

	/// Every stored atom whose root is `root`.
	pub async fn symbols_with_root(&self, root: &str) -> Result<Vec<Element>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::symbols_with_root(&mut tx, root).await;
		tx.cancel().await?;
		res
	}

	/// Every stored edge directly containing all of `atoms`, optionally restricted to edges with
	/// a direct child atom whose root is `root`.
	pub async fn edges_with_symbols(
		&self,
		atoms: &[Element],
		root: Option<&str>,
	) -> Result<Vec<Element>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::edges_with_symbols(&mut tx, atoms, root).await;
		tx.cancel().await?;
		res
	}

	/// Every stored edge.
	pub async fn all(&self) -> Result<Vec<Element>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::all(&mut tx).await;
		tx.cancel().await?;
		res
	}

	/// Every stored element (atom or edge) together with its attribute record.
	pub async fn all_attributes(&self) -> Result<Vec<(Element, AttrRecord)>, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::all_attributes(&mut tx).await;
		tx.cancel().await?;
		res
	}

	/// An element's attribute record.
	pub async fn attributes(&self, element: &Element) -> Result<AttrRecord, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::attributes(&mut tx, element).await;
		tx.cancel().await?;
		res
	}

	/// An element's degree: the number of currently-existing edges listing it as a direct child.
	pub async fn degree(&self, element: &Element) -> Result<i64, Error> {
		Ok(self.attributes(element).await?.degree())
	}

	/// A named integer attribute, or `default` if absent.
	pub async fn get_int_attribute(&self, element: &Element, name: &str, default: Option<i64>) -> Result<Option<i64>, Error> {
		Ok(self.attributes(element).await?.get_int(name, default))
	}

	/// A named float attribute, or `default` if absent.
	pub async fn get_float_attribute(&self, element: &Element, name: &str, default: Option<f64>) -> Result<Option<f64>, Error> {
		Ok(self.attributes(element).await?.get_float(name, default))
	}

	/// A named string attribute, or `default` if absent.
	pub async fn get_str_attribute(&self, element: &Element, name: &str, default: Option<&str>) -> Result<Option<String>, Error> {
		Ok(self.attributes(element).await?.get_str(name, default))
	}

	/// Set a named attribute on an element.
	pub async fn set_attribute(&self, element: &Element, name: &str, value: AttrValue) -> Result<(), Error> {
		let mut tx = self.ds.transaction(true).await?;
		let res = async {
			let mut rec = index::attributes(&mut tx, element).await?;
			rec.set(name, value);
			index::set_attributes(&mut tx, element, &rec).await
		}
		.await;
		match res {
			Ok(()) => {
				tx.commit().await?;
				Ok(())
			}
			Err(e) => {
				tx.cancel().await?;
				Err(e)
			}
		}
	}

	/// Increment a named integer attribute by 1, treating an absent attribute as 0.
	pub async fn inc_attribute(&self, element: &Element, name: &str) -> Result<(), Error> {
		self.bump_attribute(element, name, 1).await
	}

	/// Decrement a named integer attribute by 1, treating an absent attribute as 0.
	pub async fn dec_attribute(&self, element: &Element, name: &str) -> Result<(), Error> {
		self.bump_attribute(element, name, -1).await
	}

	async fn bump_attribute(&self, element: &Element, name: &str, by: i64) -> Result<(), Error> {
		let mut tx = self.ds.transaction(true).await?;
		let res = async {
			let mut rec = index::attributes(&mut tx, element).await?;
			if by >= 0 {
				rec.inc(name);
			} else {
				rec.dec(name);
			}
			index::set_attributes(&mut tx, element, &rec).await
		}
		.await;
		match res {
			Ok(()) => {
				tx.commit().await?;
				Ok(())
			}
			Err(e) => {
				tx.cancel().await?;
				Err(e)
			}
		}
	}

	/// The number of distinct atoms in the store.
	pub async fn symbol_count(&self) -> Result<u64, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::symbol_count(&mut tx).await;
		tx.cancel().await?;
		res
	}

	/// The number of distinct edges in the store.
	pub async fn edge_count(&self) -> Result<u64, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::edge_count(&mut tx).await;
		tx.cancel().await?;
		res
	}

	/// The sum of every stored element's degree.
	pub async fn total_degree(&self) -> Result<i64, Error> {
		let mut tx = self.ds.transaction(false).await?;
		let res = index::total_degree(&mut tx).await;
		tx.cancel().await?;
		res
	}

	/// Delete every edge and attribute record in the store.
	pub async fn destroy(&self) -> Result<(), Error> {
		let mut tx = self.ds.transaction(true).await?;
		match index::destroy(&mut tx).await {
			Ok(()) => {
				tx.commit().await?;
				Ok(())
			}
			Err(e) => {
				tx.cancel().await?;
				Err(e)
			}
		}
	}
}
